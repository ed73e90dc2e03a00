//! Force applicator: нормализованный импульс для locomotion и бросков.
//!
//! Нулевое направление: легальный no-op (нулевой импульс), не ошибка.

use bevy::prelude::*;
use bevy_rapier2d::prelude::ExternalImpulse;

use crate::components::Player;

/// Event: игрок хочет сдвинуться в направлении (tap → cursor direction)
#[derive(Event, Debug, Clone, Copy)]
pub struct MoveIntent {
    /// Направление; нормализуется при применении
    pub direction: Vec2,
}

/// `direction` → единичный вектор × `intensity`. Нулевой вектор остаётся нулевым.
pub fn scaled_direction(direction: Vec2, intensity: f32) -> Vec2 {
    direction.normalize_or_zero() * intensity
}

/// Добавляет импульс к телу (Rapier сбрасывает `ExternalImpulse` после шага).
pub fn apply_force(impulse: &mut ExternalImpulse, direction: Vec2, intensity: f32) {
    impulse.impulse += scaled_direction(direction, intensity);
}

/// Система: MoveIntent → импульс игроку.
pub fn apply_move_intents(
    mut intents: EventReader<MoveIntent>,
    mut players: Query<&mut ExternalImpulse, With<Player>>,
) {
    for intent in intents.read() {
        for mut impulse in players.iter_mut() {
            apply_force(&mut impulse, intent.direction, 1.0);
        }
    }
}
