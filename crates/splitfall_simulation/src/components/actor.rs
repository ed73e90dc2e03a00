//! Компоненты комбатантов: Player, Enemy, Power, ArchetypeKey

use bevy::prelude::*;

/// Маркер игрока (единственный wielder оружия в этом core)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Power, ArchetypeKey)]
pub struct Player;

/// Маркер врага. Живые враги дополнительно числятся в `ActiveEnemies`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Power, ArchetypeKey, crate::combat::HitLedger)]
pub struct Enemy;

/// Health и damage в одном числе.
///
/// Атакующий наносит ровно свой power; power защитника бой никогда не увеличивает.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub struct Power(pub u32);

impl Power {
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Уменьшает power на `amount` (saturating, ниже нуля не уходит).
    pub fn reduce(&mut self, amount: u32) {
        self.0 = self.0.saturating_sub(amount);
    }
}

/// Faction/archetype key ("bandit", "skeleton", ...): для presentation и debug логов.
#[derive(Component, Debug, Clone, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub struct ArchetypeKey(pub String);

impl ArchetypeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Маркер: враг повержен, тело вне симуляции, ждёт despawn после presentation.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Defeated;
