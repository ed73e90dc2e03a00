//! Physics слой combat core (Rapier 2D)
//!
//! - collision_layers: category/mask registry
//! - body: конфигурация тел (player, enemy, attack, pickup)
//! - lifecycle: activate/deactivate без уничтожения
//! - force: нормализованные импульсы
//! - hooks: подавление контакта уже засчитанных пар

use bevy::prelude::*;
use bevy_rapier2d::prelude::RapierPhysicsPlugin;

pub mod body;
pub mod collision_layers;
pub mod force;
pub mod hooks;
pub mod lifecycle;

// Re-export основных типов
pub use body::{configure_attack, configure_enemy, configure_pickup, configure_player, tether_joint};
pub use collision_layers::{category_for, collision_groups, mask_for, Faction};
pub use force::{apply_force, scaled_direction, MoveIntent};
pub use hooks::{ContactSuppressionHooks, SuppressedContacts};
pub use lifecycle::{is_body_active, BodyLifecycle};

/// Rapier backend с нашими contact hooks.
///
/// Combat core сам по себе backend не требует (тесты шлют `CollisionEvent`
/// напрямую); этот plugin подключает реальный physics step.
pub struct PhysicsBackendPlugin {
    pub pixels_per_meter: f32,
}

impl Default for PhysicsBackendPlugin {
    fn default() -> Self {
        Self { pixels_per_meter: 100.0 }
    }
}

impl Plugin for PhysicsBackendPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SuppressedContacts>().add_plugins(
            // Physics step в FixedPostUpdate → combat читает события следующим тиком
            RapierPhysicsPlugin::<ContactSuppressionHooks>::pixels_per_meter(self.pixels_per_meter)
                .in_fixed_schedule(),
        );
    }
}
