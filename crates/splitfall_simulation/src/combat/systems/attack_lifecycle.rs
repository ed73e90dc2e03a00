//! Attack lifecycle systems: use → (release ↔ engage) → end.
//!
//! ```text
//! UseWeaponIntent → spawn + configure (blade на tether, fan/dart в полёт)
//! ReleaseAttack   → tether снят → тело parked → latch ключ снят из ledgers
//! EngageAttack    → tether обратно → тело активно → latch взведён
//! AttackExpiry    → EndAttack для брошенных атак
//! EndAttack       → tether снят → ledgers очищены от uid → despawn
//! ```
//!
//! Release и engage забывают подавленные пары атаки: после re-engage
//! контакт с тем же врагом снова должен дойти до combat core.

use std::collections::HashSet;

use bevy::ecs::system::EntityCommands;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::combat::events::{EndAttack, EngageAttack, ReleaseAttack, UseWeaponIntent};
use crate::combat::ledger::{HitKey, HitLedger};
use crate::combat::roster::AttackUidAllocator;
use crate::components::{Attack, WeaponVariant};
use crate::config::CombatConfig;
use crate::physics::body::{friction_components, tether_joint};
use crate::physics::{scaled_direction, BodyLifecycle, SuppressedContacts};
use crate::spawn::spawn_attack;

/// Брошенная атака (dart/fan) заканчивается сама по истечении времени.
#[derive(Component, Debug, Clone, Copy)]
pub struct AttackExpiry {
    /// Время `EndAttack` (в секундах от старта)
    pub expires_at: f32,
}

/// Система: UseWeaponIntent → новая attack entity.
pub fn use_weapons(
    mut intents: EventReader<UseWeaponIntent>,
    mut commands: Commands,
    config: Res<CombatConfig>,
    time: Res<Time>,
    mut uids: ResMut<AttackUidAllocator>,
    wielders: Query<&Transform>,
) {
    for intent in intents.read() {
        let Ok(wielder_transform) = wielders.get(intent.wielder) else {
            crate::logger::log_warning(&format!(
                "WARN: UseWeaponIntent: wielder {:?} not found",
                intent.wielder
            ));
            continue;
        };

        let uid = uids.allocate();
        let attack = spawn_attack(
            &mut commands,
            &config,
            uid,
            intent.wielder,
            wielder_transform.translation.truncate(),
            intent.variant,
            intent.equipment.clone(),
        );

        if intent.variant.is_launched() {
            let speed = config.scaled(config.launch_speed);
            // Fan продолжает вращаться и в полёте
            let angvel = match intent.variant {
                WeaponVariant::SpinningFan => config.fan_angular_velocity,
                _ => 0.0,
            };
            commands.entity(attack).insert((
                Velocity {
                    linvel: scaled_direction(intent.direction, speed),
                    angvel,
                },
                AttackExpiry {
                    expires_at: time.elapsed_secs() + config.launched_attack_lifetime_secs,
                },
            ));
        }

        crate::logger::log(&format!(
            "🗡️ {:?} used {:?} (uid {}) → {:?}",
            intent.wielder, intent.variant, uid.0, attack
        ));
    }
}

/// Система: явный release latching оружия.
pub fn release_attacks(
    mut events: EventReader<ReleaseAttack>,
    mut commands: Commands,
    mut attacks: Query<&mut Attack>,
    mut ledgers: Query<&mut HitLedger>,
    mut suppressed: ResMut<SuppressedContacts>,
) {
    for event in events.read() {
        let Ok(mut attack) = attacks.get_mut(event.attack) else {
            continue;
        };
        if !attack.variant.is_latching() || !attack.latch {
            // Не latching или уже отпущено: no-op
            continue;
        }

        let Ok(mut body) = commands.get_entity(event.attack) else {
            continue;
        };
        park_blade(&mut body);

        let key = HitKey::latched(attack.uid, attack.equipment.clone());
        for mut ledger in ledgers.iter_mut() {
            ledger.release(&key);
        }
        suppressed.forget(event.attack);
        attack.latch = false;

        crate::logger::log(&format!("🔓 Attack {:?} (uid {}) released", event.attack, attack.uid.0));
    }
}

/// Система: re-engage parked latching оружия.
pub fn engage_attacks(
    mut events: EventReader<EngageAttack>,
    mut commands: Commands,
    config: Res<CombatConfig>,
    mut attacks: Query<&mut Attack>,
    mut suppressed: ResMut<SuppressedContacts>,
) {
    for event in events.read() {
        let Ok(mut attack) = attacks.get_mut(event.attack) else {
            continue;
        };
        if !attack.variant.is_latching() || attack.latch {
            continue;
        }

        let Ok(mut body) = commands.get_entity(event.attack) else {
            continue;
        };
        body.insert((
            Velocity::zero(),
            friction_components(config.blade_friction),
            tether_joint(attack.wielder),
        ))
        .activate_body();
        // Пары, подавленные в прошлом engagement, не должны фильтровать новый
        suppressed.forget(event.attack);
        attack.latch = true;

        crate::logger::log(&format!("🔒 Attack {:?} (uid {}) engaged", event.attack, attack.uid.0));
    }
}

/// Система: истёкшие брошенные атаки → EndAttack.
pub fn expire_attacks(
    time: Res<Time>,
    attacks: Query<(Entity, &AttackExpiry)>,
    mut ends: EventWriter<EndAttack>,
) {
    let now = time.elapsed_secs();
    for (attack, expiry) in attacks.iter() {
        if now >= expiry.expires_at {
            ends.write(EndAttack { attack });
        }
    }
}

/// Система: конец active window: уничтожение атаки.
pub fn end_attacks(
    mut events: EventReader<EndAttack>,
    mut commands: Commands,
    attacks: Query<&Attack>,
    mut ledgers: Query<&mut HitLedger>,
    mut suppressed: ResMut<SuppressedContacts>,
) {
    // Повторный EndAttack в том же тике: entity ещё не удалена
    let mut ended = HashSet::new();

    for event in events.read() {
        if !ended.insert(event.attack) {
            continue;
        }
        let Ok(attack) = attacks.get(event.attack) else {
            continue;
        };

        let purged: usize = ledgers
            .iter_mut()
            .map(|mut ledger| ledger.purge_attack(attack.uid))
            .sum();
        suppressed.forget(event.attack);

        if let Ok(mut body) = commands.get_entity(event.attack) {
            // Joint снимаем явно до despawn
            body.remove::<ImpulseJoint>();
            body.despawn();
        }

        crate::logger::log(&format!(
            "🧹 Attack {:?} (uid {}) ended, {} ledger entries purged",
            event.attack, attack.uid.0, purged
        ));
    }
}

/// Tether снят, затем тело уходит из симуляции.
pub(crate) fn park_blade(body: &mut EntityCommands) {
    body.remove::<ImpulseJoint>().insert(Velocity::zero()).deactivate_body();
}
