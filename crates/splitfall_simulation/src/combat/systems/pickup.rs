//! Pickup collection: контакт игрока с sensor drop.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::combat::events::{PickupCollected, TreasureOpened};
use crate::components::{Pickup, PickupKind, Player};
use crate::physics::BodyLifecycle;

/// Система: игрок коснулся pickup → собрать (один раз).
pub fn collect_pickups(
    mut collisions: EventReader<CollisionEvent>,
    mut commands: Commands,
    players: Query<(), With<Player>>,
    mut pickups: Query<&mut Pickup>,
    mut collected: EventWriter<PickupCollected>,
    mut opened: EventWriter<TreasureOpened>,
) {
    for event in collisions.read() {
        let &CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        let (player, pickup_entity) = if players.contains(a) && pickups.contains(b) {
            (a, b)
        } else if players.contains(b) && pickups.contains(a) {
            (b, a)
        } else {
            continue;
        };

        let Ok(mut pickup) = pickups.get_mut(pickup_entity) else {
            continue;
        };
        if !pickup.collect() {
            // Уже собран: повторный контакт ничего не меняет
            continue;
        }

        match pickup.kind {
            PickupKind::ExperienceDrop => {
                collected.write(PickupCollected {
                    pickup: pickup_entity,
                    collector: player,
                });
            }
            PickupKind::Treasure => {
                if let Ok(mut body) = commands.get_entity(pickup_entity) {
                    body.deactivate_body();
                }
                opened.write(TreasureOpened {
                    treasure: pickup_entity,
                    opener: player,
                });
            }
        }

        crate::logger::log(&format!("✨ {:?} collected {:?} ({:?})", player, pickup_entity, pickup.kind));
    }
}
