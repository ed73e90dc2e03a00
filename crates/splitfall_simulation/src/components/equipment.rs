//! Attack компоненты: одно применение оружия = одна attack entity.
//!
//! # Варианты оружия
//!
//! | Variant        | Shape     | Sensor | После попадания                          |
//! |----------------|-----------|--------|------------------------------------------|
//! | `TetheredBlade`| rectangle | нет    | tether снят, тело parked, latch отпущен  |
//! | `SpinningFan`  | circle    | нет    | продолжает вращаться, активно            |
//! | `Cleave`       | rectangle | да     | активно (проходит сквозь тела)           |
//! | `Dart`         | rectangle | нет    | velocity = 0, активно до `EndAttack`     |

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Уникальный id одного применения оружия (ключ hit ledger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct AttackUid(pub u64);

/// Equipment discriminator (тип снаряжения, "dagger", "fan", ...).
///
/// Участвует в ключе ledger только у latching оружия.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub struct EquipmentKey(pub String);

impl EquipmentKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

/// Поведение оружия: выбирается один раз при конфигурации тела.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum WeaponVariant {
    /// Клинок на tether к wielder; latching до первого попадания или release
    TetheredBlade,
    /// Вращающаяся area атака
    SpinningFan,
    /// Неподвижный sensor (проходит сквозь тела, но репортит контакт)
    Cleave,
    /// Снаряд; удаление: снаружи (`EndAttack`)
    Dart,
}

impl WeaponVariant {
    /// Оружие остаётся "взведённым", пока его явно не отпустят.
    pub fn is_latching(&self) -> bool {
        matches!(self, WeaponVariant::TetheredBlade)
    }

    pub fn is_sensor(&self) -> bool {
        matches!(self, WeaponVariant::Cleave)
    }

    /// Оружие отправляется в полёт при использовании.
    pub fn is_launched(&self) -> bool {
        matches!(self, WeaponVariant::SpinningFan | WeaponVariant::Dart)
    }

    pub fn default_equipment_key(&self) -> &'static str {
        match self {
            WeaponVariant::TetheredBlade => "dagger",
            WeaponVariant::SpinningFan => "fan",
            WeaponVariant::Cleave => "cleave",
            WeaponVariant::Dart => "dart",
        }
    }
}

/// Активное применение оружия.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Attack {
    pub uid: AttackUid,
    pub equipment: EquipmentKey,
    pub variant: WeaponVariant,
    /// Кто держит оружие (его `Power` = урон атаки)
    pub wielder: Entity,
    /// Latching оружие взведено (hit-capable до release)
    pub latch: bool,
}

impl Attack {
    pub fn new(uid: AttackUid, equipment: EquipmentKey, variant: WeaponVariant, wielder: Entity) -> Self {
        Self {
            uid,
            equipment,
            variant,
            wielder,
            latch: variant.is_latching(),
        }
    }

    /// Отпущенный latching клинок инертен; остальные варианты всегда hit-capable.
    pub fn is_hit_capable(&self) -> bool {
        !self.variant.is_latching() || self.latch
    }

    /// Discriminator для ledger: equipment key только пока latch взведён.
    pub fn latch_discriminator(&self) -> Option<&EquipmentKey> {
        if self.latch {
            Some(&self.equipment)
        } else {
            None
        }
    }
}
