//! Combat events: intents внутрь core и contracts наружу (presentation, spawn).

use bevy::prelude::*;

use crate::components::{AttackUid, EquipmentKey, WeaponVariant};

// ============================================================================
// Intents (input/AI → core)
// ============================================================================

/// Event: wielder применяет оружие в направлении
#[derive(Event, Debug, Clone)]
pub struct UseWeaponIntent {
    pub wielder: Entity,
    pub variant: WeaponVariant,
    pub equipment: EquipmentKey,
    /// Направление броска (для fan/dart); нормализуется при применении
    pub direction: Vec2,
}

impl UseWeaponIntent {
    pub fn new(wielder: Entity, variant: WeaponVariant, direction: Vec2) -> Self {
        Self {
            wielder,
            variant,
            equipment: EquipmentKey::new(variant.default_equipment_key()),
            direction,
        }
    }
}

/// Event: явно отпустить latching оружие (tether снят, тело parked)
#[derive(Event, Debug, Clone, Copy)]
pub struct ReleaseAttack {
    pub attack: Entity,
}

/// Event: снова взвести parked latching оружие
#[derive(Event, Debug, Clone, Copy)]
pub struct EngageAttack {
    pub attack: Entity,
}

/// Event: active window атаки закончился: тело и tether уничтожаются
#[derive(Event, Debug, Clone, Copy)]
pub struct EndAttack {
    pub attack: Entity,
}

// ============================================================================
// Outcomes (core → presentation / spawn layer)
// ============================================================================

/// Event: попадание засчитано, защитник выжил
#[derive(Event, Debug, Clone)]
pub struct HitLanded {
    pub attack: AttackUid,
    pub attacker: Entity,
    pub defender: Entity,
    pub damage: u32,
    pub remaining_power: u32,
}

/// Event: защитник повержен
#[derive(Event, Debug, Clone)]
pub struct EnemyDefeated {
    pub enemy: Entity,
    pub killer: Entity,
    pub attack: AttackUid,
}

/// Event: spawn layer должен создать врага с этим power
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemySpawnRequested {
    pub power: u32,
}

/// Presentation: всплывающий текст у защитника
#[derive(Event, Debug, Clone)]
pub struct CombatTextFlash {
    pub position: Vec2,
    pub text: String,
}

/// Presentation: death эффект; entity ещё жива до `DespawnAfter`
#[derive(Event, Debug, Clone, Copy)]
pub struct EnemyDeathFlash {
    pub enemy: Entity,
}

/// Presentation: experience drop собран (отцепить tween)
#[derive(Event, Debug, Clone, Copy)]
pub struct PickupCollected {
    pub pickup: Entity,
    pub collector: Entity,
}

/// Treasure открыт игроком
#[derive(Event, Debug, Clone, Copy)]
pub struct TreasureOpened {
    pub treasure: Entity,
    pub opener: Entity,
}
