//! Combat module: collision resolution core
//!
//! ECS ответственность:
//! - Hit validation: contact → (attack, defender), hit ledger dedup
//! - Combat rules: power comparison, split on defeat
//! - Body lifecycle: tether release, parking, deferred despawn
//!
//! Снаружи (contracts через events):
//! - Physics: `CollisionEvent` от Rapier
//! - Presentation: CombatTextFlash, EnemyDeathFlash, PickupCollected
//! - Spawn: EnemySpawnRequested

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

pub mod events;
pub mod ledger;
pub mod resolver;
pub mod roster;
pub mod systems;
pub mod validator;

// Re-export основных типов
pub use events::*;
pub use ledger::{HitConfirmation, HitKey, HitLedger};
pub use resolver::{resolve_hit, CombatOutcome, SPLIT_SPAWN_COUNT};
pub use roster::{ActiveEnemies, AttackUidAllocator, EncounterStats};
pub use systems::{AttackExpiry, DespawnAfter};
pub use validator::{resolve_participants, validate_hit, ContactParticipants, ContactRejection};

use crate::config::CombatConfig;
use crate::physics::force::{apply_move_intents, MoveIntent};
use crate::physics::SuppressedContacts;
use crate::spawn::spawn_requested_enemies;
use crate::DeterministicRng;

/// Combat Plugin
///
/// Регистрирует combat системы в FixedUpdate.
///
/// Порядок выполнения:
/// 1. use_weapons: intent → attack entity
/// 2. process_attack_contacts: validation + resolution
/// 3. collect_pickups: player ↔ drop
/// 4. release/engage/expire/end attacks: lifecycle
/// 5. apply_move_intents: locomotion импульсы
/// 6. spawn_requested_enemies: split on defeat
/// 7. despawn_after_timeout: отложенное удаление поверженных
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Ресурсы (init не перетирает уже вставленные)
        app.init_resource::<CombatConfig>()
            .init_resource::<DeterministicRng>()
            .init_resource::<ActiveEnemies>()
            .init_resource::<EncounterStats>()
            .init_resource::<AttackUidAllocator>()
            .init_resource::<SuppressedContacts>();

        // Регистрация событий (CollisionEvent: на случай запуска без Rapier backend)
        app.add_event::<CollisionEvent>()
            .add_event::<UseWeaponIntent>()
            .add_event::<ReleaseAttack>()
            .add_event::<EngageAttack>()
            .add_event::<EndAttack>()
            .add_event::<MoveIntent>()
            .add_event::<HitLanded>()
            .add_event::<EnemyDefeated>()
            .add_event::<EnemySpawnRequested>()
            .add_event::<CombatTextFlash>()
            .add_event::<EnemyDeathFlash>()
            .add_event::<PickupCollected>()
            .add_event::<TreasureOpened>();

        app.add_systems(
            FixedUpdate,
            (
                // Фаза 1: новые атаки
                systems::use_weapons,
                // Фаза 2: контакты текущего тика
                systems::process_attack_contacts,
                systems::collect_pickups,
                // Фаза 3: lifecycle атак
                systems::release_attacks,
                systems::engage_attacks,
                systems::expire_attacks,
                systems::end_attacks,
                // Фаза 4: силы и spawn
                apply_move_intents,
                spawn_requested_enemies,
                // Фаза 5: cleanup
                systems::despawn_after_timeout,
            )
                .chain(), // Последовательное выполнение
        );
    }
}
