//! Pickup компоненты (experience drops, treasure)

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum PickupKind {
    /// Presentation отцепляет tween при сборе
    ExperienceDrop,
    /// Тело уходит из симуляции, наружу идёт `TreasureOpened`
    Treasure,
}

/// Sensor pickup; собирается игроком ровно один раз.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Pickup {
    pub kind: PickupKind,
    pub collected: bool,
}

impl Pickup {
    pub fn new(kind: PickupKind) -> Self {
        Self { kind, collected: false }
    }

    /// Помечает pickup собранным. `false` если он уже был собран.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }
}
