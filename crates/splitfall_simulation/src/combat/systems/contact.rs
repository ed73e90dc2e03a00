//! Attack contact system: physics contact → validation → variant effect → resolution.
//!
//! Все контакты тика обрабатываются синхронно, в порядке физики. Состояние,
//! от которого зависит допуск следующего контакта (ledger, latch,
//! `ActiveEnemies`), меняется сразу; изменения тел идут через Commands.

use bevy::ecs::system::{EntityCommands, SystemParam};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::combat::events::{CombatTextFlash, EnemyDeathFlash, EnemyDefeated, EnemySpawnRequested, HitLanded};
use crate::combat::ledger::{HitKey, HitLedger};
use crate::combat::resolver::{resolve_hit, CombatOutcome};
use crate::combat::roster::{ActiveEnemies, EncounterStats};
use crate::combat::systems::attack_lifecycle::park_blade;
use crate::combat::systems::death::DespawnAfter;
use crate::combat::validator::{resolve_participants, validate_hit, ContactRejection};
use crate::components::{Attack, Defeated, Enemy, Power, WeaponVariant};
use crate::config::CombatConfig;
use crate::physics::body::friction_components;
use crate::physics::{BodyLifecycle, SuppressedContacts};

/// Все outcome events одной пачкой (presentation + spawn layer).
#[derive(SystemParam)]
pub struct CombatFeedback<'w> {
    pub hits: EventWriter<'w, HitLanded>,
    pub defeats: EventWriter<'w, EnemyDefeated>,
    pub spawns: EventWriter<'w, EnemySpawnRequested>,
    pub texts: EventWriter<'w, CombatTextFlash>,
    pub deaths: EventWriter<'w, EnemyDeathFlash>,
}

/// Система: обработка контактов атак с врагами.
pub fn process_attack_contacts(
    mut collisions: EventReader<CollisionEvent>,
    mut commands: Commands,
    config: Res<CombatConfig>,
    time: Res<Time>,
    mut enemies: ResMut<ActiveEnemies>,
    mut suppressed: ResMut<SuppressedContacts>,
    mut stats: ResMut<EncounterStats>,
    mut attacks: Query<&mut Attack>,
    mut defenders: Query<(&mut Power, &mut HitLedger, &Transform), With<Enemy>>,
    wielders: Query<&Power, Without<Enemy>>,
    mut feedback: CombatFeedback,
) {
    for event in collisions.read() {
        // Stopped нам не интересен: попадание засчитывается на начале контакта
        let &CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        let participants = match resolve_participants(a, b, |e| attacks.contains(e), &enemies) {
            Ok(participants) => participants,
            Err(ContactRejection::NotAnAttack) => continue,
            Err(rejection) => {
                crate::logger::log(&format!("DEBUG: contact {:?} ↔ {:?} ignored: {}", a, b, rejection));
                continue;
            }
        };
        let attack_entity = participants.attack;
        let defender = participants.defender;

        let Ok(mut attack) = attacks.get_mut(attack_entity) else {
            continue;
        };
        let Ok(attacker_power) = wielders.get(attack.wielder).map(Power::value) else {
            crate::logger::log(&format!(
                "DEBUG: contact {:?} ignored: {}",
                attack_entity,
                ContactRejection::StaleWielder
            ));
            continue;
        };
        let Ok((mut power, mut ledger, transform)) = defenders.get_mut(defender) else {
            // Враг в ActiveEnemies, но без компонентов: рассинхрон, не падаем
            crate::logger::log_warning(&format!("WARN: tracked enemy {:?} has no combat components", defender));
            enemies.remove(defender);
            continue;
        };

        // Check + write ledger за одну операцию
        if let Err(rejection) = validate_hit(&mut ledger, &attack) {
            if rejection.suppresses_contact() {
                suppressed.suppress(attack_entity, defender);
            }
            crate::logger::log(&format!(
                "DEBUG: {:?} (uid {}) → {:?} rejected: {}",
                attack_entity, attack.uid.0, defender, rejection
            ));
            continue;
        }

        apply_variant_hit(&mut commands.entity(attack_entity), &mut attack, &mut ledger, &config);

        feedback.texts.write(CombatTextFlash {
            position: combat_text_position(transform, &config),
            text: attacker_power.to_string(),
        });

        match resolve_hit(attacker_power, &mut power) {
            CombatOutcome::Defeated => {
                // Контакт выключен до того, как кто-то ещё в этом тике его увидит
                suppressed.suppress(attack_entity, defender);
                enemies.remove(defender);
                ledger.clear();
                stats.enemies_defeated += 1;

                commands.entity(defender).deactivate_body().insert((
                    Defeated,
                    DespawnAfter {
                        despawn_time: time.elapsed_secs() + config.death_presentation_secs,
                    },
                ));

                feedback.defeats.write(EnemyDefeated {
                    enemy: defender,
                    killer: attack.wielder,
                    attack: attack.uid,
                });
                feedback.deaths.write(EnemyDeathFlash { enemy: defender });

                // Split on defeat: два новых врага, каждый сильнее на число побед
                let replacement_power = config.base_enemy_power + stats.enemies_defeated;
                for _ in 0..CombatOutcome::Defeated.replacement_spawns() {
                    feedback.spawns.write(EnemySpawnRequested {
                        power: replacement_power,
                    });
                }

                crate::logger::log_info(&format!(
                    "💀 Enemy {:?} defeated by {:?} (power {}), total defeated: {}",
                    defender, attack.wielder, attacker_power, stats.enemies_defeated
                ));
            }
            CombatOutcome::Damaged { remaining } => {
                feedback.hits.write(HitLanded {
                    attack: attack.uid,
                    attacker: attack.wielder,
                    defender,
                    damage: attacker_power,
                    remaining_power: remaining,
                });

                crate::logger::log(&format!(
                    "⚔️ Hit {:?} for {} (remaining power {})",
                    defender, attacker_power, remaining
                ));
            }
        }
    }
}

/// Variant-specific реакция тела атаки на засчитанное попадание.
pub fn apply_variant_hit(
    attack_body: &mut EntityCommands,
    attack: &mut Attack,
    ledger: &mut HitLedger,
    config: &CombatConfig,
) {
    match attack.variant {
        WeaponVariant::TetheredBlade => {
            // Tether снимаем до деактивации тела (joint не должен висеть)
            attack_body.insert(friction_components(config.attack_friction));
            park_blade(attack_body);

            // Latch отпущен: ключ по equipment больше не держим
            ledger.release(&HitKey::latched(attack.uid, attack.equipment.clone()));
            attack.latch = false;
        }
        WeaponVariant::SpinningFan | WeaponVariant::Cleave => {
            attack_body.insert(friction_components(config.attack_friction));
        }
        WeaponVariant::Dart => {
            attack_body.insert(Velocity::zero());
        }
    }
}

/// Позиция combat text: `offset` ниже верхней кромки врага (мир y-up).
pub fn combat_text_position(transform: &Transform, config: &CombatConfig) -> Vec2 {
    let half_height = config.scaled(config.enemy_body.height) / 2.0;
    transform.translation.truncate() + Vec2::Y * (half_height - config.scaled(config.combat_text_offset))
}

