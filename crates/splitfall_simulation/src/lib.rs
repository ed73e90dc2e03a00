//! Splitfall Simulation Core
//!
//! ECS-симуляция на Bevy 0.16 + Rapier 2D (collision resolution core)
//!
//! Слои:
//! - physics = категории коллизий, конфигурация тел, lifecycle, импульсы
//! - combat = валидация попаданий (hit ledger), power rules, split on defeat
//! - spawn = создание тел с готовой физикой
//!
//! Presentation (combat text, death flash, анимации) живёт снаружи и
//! получает только events.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod combat;
pub mod components;
pub mod config;
pub mod logger;
pub mod physics;
pub mod spawn;

// Re-export базовых типов для удобства
pub use combat::{
    ActiveEnemies, AttackUidAllocator, CombatOutcome, CombatPlugin, ContactRejection, EncounterStats, HitKey,
    HitLedger,
};
pub use combat::events::*;
pub use components::*;
pub use config::{BodySize, CombatConfig, ConfigError};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel};
pub use physics::{BodyLifecycle, Faction, MoveIntent, PhysicsBackendPlugin};

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Rapier backend подключается отдельно (`PhysicsBackendPlugin`): headless
/// тесты гоняют combat core на синтетических `CollisionEvent`.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .add_plugins(CombatPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// Единственный источник случайности: позиции и archetype replacement врагов.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}
