//! Collision category registry.
//!
//! ## Архитектура:
//! - **Category (битовая маска):** какой faction принадлежит тело
//! - **Mask (битовая маска):** с какими faction тело реагирует
//!
//! Rapier пропускает пару только если category каждого тела попадает в mask
//! другого, поэтому пары задаются симметрично:
//! - Player ↔ Drop (сбор pickups)
//! - Enemy ↔ Attack (попадания)
//!
//! Значения статичны на всё время жизни тела. Gameplay код сюда не смотрит,
//! только конфигуратор тел.

use bevy_rapier2d::prelude::{CollisionGroups, Group};

/// Bit 1: Player
pub const COLLISION_CATEGORY_PLAYER: u32 = 0b0001; // 1

/// Bit 2: Enemies
pub const COLLISION_CATEGORY_ENEMY: u32 = 0b0010; // 2

/// Bit 3: Attack bodies (blade, fan, cleave, dart)
pub const COLLISION_CATEGORY_ATTACK: u32 = 0b0100; // 4

/// Bit 4: Drops (experience, treasure)
pub const COLLISION_CATEGORY_DROP: u32 = 0b1000; // 8

/// Gameplay faction физического тела.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    Player,
    Enemy,
    Attack,
    Drop,
}

impl Faction {
    pub const ALL: [Faction; 4] = [Faction::Player, Faction::Enemy, Faction::Attack, Faction::Drop];
}

/// На каком bit находится faction.
pub const fn category_for(faction: Faction) -> u32 {
    match faction {
        Faction::Player => COLLISION_CATEGORY_PLAYER,
        Faction::Enemy => COLLISION_CATEGORY_ENEMY,
        Faction::Attack => COLLISION_CATEGORY_ATTACK,
        Faction::Drop => COLLISION_CATEGORY_DROP,
    }
}

/// С какими категориями реагируют тела faction.
pub const fn mask_for(faction: Faction) -> u32 {
    match faction {
        Faction::Player => COLLISION_CATEGORY_DROP,
        Faction::Enemy => COLLISION_CATEGORY_ATTACK,
        Faction::Attack => COLLISION_CATEGORY_ENEMY,
        Faction::Drop => COLLISION_CATEGORY_PLAYER,
    }
}

/// Rapier `CollisionGroups` (memberships = category, filters = mask).
pub fn collision_groups(faction: Faction) -> CollisionGroups {
    CollisionGroups::new(
        Group::from_bits_truncate(category_for(faction)),
        Group::from_bits_truncate(mask_for(faction)),
    )
}
