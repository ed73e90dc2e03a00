//! Bookkeeping ресурсы боя: живые враги, счётчик поражений, uid атак.
//!
//! Мутируются только системами FixedUpdate (один tick thread).

use std::collections::HashSet;

use bevy::prelude::*;

use crate::components::AttackUid;

/// Враги, по которым ещё можно попасть.
///
/// Меняется сразу внутри системы (не через Commands), чтобы следующий
/// контакт в том же тике уже видел поверженного врага как stale.
#[derive(Resource, Debug, Default)]
pub struct ActiveEnemies {
    enemies: HashSet<Entity>,
}

impl ActiveEnemies {
    pub fn insert(&mut self, enemy: Entity) -> bool {
        self.enemies.insert(enemy)
    }

    pub fn remove(&mut self, enemy: Entity) -> bool {
        self.enemies.remove(&enemy)
    }

    pub fn contains(&self, enemy: Entity) -> bool {
        self.enemies.contains(&enemy)
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.enemies.iter().copied()
    }
}

/// Статистика encounter (для HUD и power новых врагов).
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EncounterStats {
    pub enemies_defeated: u32,
}

/// Монотонный источник `AttackUid`.
#[derive(Resource, Debug, Default)]
pub struct AttackUidAllocator {
    next: u64,
}

impl AttackUidAllocator {
    pub fn allocate(&mut self) -> AttackUid {
        self.next += 1;
        AttackUid(self.next)
    }
}
