//! Test harness: CombatPlugin без Rapier backend, контакты шлём руками.

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

use crate::combat::roster::{ActiveEnemies, AttackUidAllocator};
use crate::combat::CombatPlugin;
use crate::components::{EquipmentKey, PickupKind, WeaponVariant};
use crate::config::{BodySize, CombatConfig};
use crate::spawn::{spawn_attack, spawn_enemy, spawn_pickup, spawn_player};

pub fn combat_test_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>().add_plugins(CombatPlugin);
    app
}

fn config(app: &App) -> CombatConfig {
    app.world().resource::<CombatConfig>().clone()
}

pub fn spawn_test_player(app: &mut App, power: u32) -> Entity {
    let config = CombatConfig {
        player_power: power,
        ..config(app)
    };
    let world = app.world_mut();
    let player = spawn_player(&mut world.commands(), &config, Vec2::ZERO);
    world.flush();
    player
}

pub fn spawn_test_enemy(app: &mut App, power: u32, position: Vec2) -> Entity {
    let config = config(app);
    app.world_mut()
        .resource_scope(|world, mut enemies: Mut<ActiveEnemies>| {
            let enemy = spawn_enemy(&mut world.commands(), &mut enemies, &config, "slime", power, position);
            world.flush();
            enemy
        })
}

pub fn spawn_test_attack(app: &mut App, wielder: Entity, variant: WeaponVariant) -> Entity {
    let config = config(app);
    let uid = app.world_mut().resource_mut::<AttackUidAllocator>().allocate();
    let world = app.world_mut();
    let attack = spawn_attack(
        &mut world.commands(),
        &config,
        uid,
        wielder,
        Vec2::ZERO,
        variant,
        EquipmentKey::new(variant.default_equipment_key()),
    );
    world.flush();
    attack
}

pub fn spawn_test_pickup(app: &mut App, kind: PickupKind) -> Entity {
    let config = config(app);
    let world = app.world_mut();
    let pickup = spawn_pickup(
        &mut world.commands(),
        &config,
        kind,
        BodySize {
            width: 16.0,
            height: 16.0,
        },
        Vec2::new(10.0, 0.0),
    );
    world.flush();
    pickup
}

/// Контакт начался (как его отдал бы Rapier)
pub fn contact(app: &mut App, a: Entity, b: Entity) {
    app.world_mut()
        .send_event(CollisionEvent::Started(a, b, CollisionEventFlags::empty()));
}

pub fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

/// Все events типа E, записанные с начала теста
pub fn sent<E: Event + Clone>(app: &App) -> Vec<E> {
    app.world()
        .resource::<Events<E>>()
        .iter_current_update_events()
        .cloned()
        .collect()
}
