//! Physics body configurator.
//!
//! Переводит логического участника боя в правильно оформленное Rapier тело:
//! shape, friction/damping, restitution, rotation lock, category/mask, sensor.
//!
//! Контакт разрешается обратно в entity напрямую (collision event несёт
//! `Entity`), поэтому имена тел не нужны.
//!
//! Вариант оружия выбирается один раз здесь; его поведение при попадании
//! диспетчеризуется по тому же `WeaponVariant` в `combat::systems::contact`.

use bevy::ecs::system::EntityCommands;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::WeaponVariant;
use crate::config::{BodySize, CombatConfig, FrictionSettings};
use crate::physics::collision_layers::{collision_groups, Faction};

/// Минимальный размер тела по каждой оси (нулевой размер поверхность не держит).
pub const MIN_BODY_EXTENT: f32 = 1.0;

/// Полный размер тела в world units, с clamp до `MIN_BODY_EXTENT`.
pub fn body_extent(size: BodySize, scale: f32) -> Vec2 {
    let scaled = Vec2::new(size.width, size.height) * scale;
    scaled.max(Vec2::splat(MIN_BODY_EXTENT))
}

/// Прямоугольный collider по полному размеру.
pub fn rectangle_collider(extent: Vec2) -> Collider {
    Collider::cuboid(extent.x / 2.0, extent.y / 2.0)
}

/// Surface friction → `Friction`, air friction → linear damping.
pub fn friction_components(settings: FrictionSettings) -> (Friction, Damping) {
    (
        Friction::coefficient(settings.surface),
        Damping {
            linear_damping: settings.air,
            angular_damping: 0.0,
        },
    )
}

/// Tether клинка к wielder (joint живёт на attack entity).
pub fn tether_joint(wielder: Entity) -> ImpulseJoint {
    ImpulseJoint::new(wielder, RevoluteJointBuilder::new())
}

/// Общая часть всех тел: dynamic, без гравитации, с collision events.
fn base_body(faction: Faction) -> impl Bundle {
    (
        RigidBody::Dynamic,
        GravityScale(0.0),
        collision_groups(faction),
        ActiveEvents::COLLISION_EVENTS,
        Velocity::zero(),
        ExternalImpulse::default(),
    )
}

/// Игрок: rectangle 80×100 (× scale), без вращения, умеренное трение.
pub fn configure_player(entity: &mut EntityCommands, config: &CombatConfig) {
    let extent = body_extent(config.player_body, config.base_scale_factor);

    entity.insert((
        base_body(Faction::Player),
        rectangle_collider(extent),
        LockedAxes::ROTATION_LOCKED,
        friction_components(config.player_friction),
    ));
}

/// Враг: rectangle меньше игрока, без вращения, высокий bounce.
pub fn configure_enemy(entity: &mut EntityCommands, config: &CombatConfig) {
    let extent = body_extent(config.enemy_body, config.base_scale_factor);

    entity.insert((
        base_body(Faction::Enemy),
        rectangle_collider(extent),
        LockedAxes::ROTATION_LOCKED,
        Restitution::coefficient(config.enemy_restitution),
        friction_components(config.enemy_friction),
        ActiveHooks::FILTER_CONTACT_PAIRS | ActiveHooks::FILTER_INTERSECTION_PAIR,
    ));
}

/// Тело атаки по варианту оружия.
///
/// Общее: velocity сброшена, category = attack, mask = enemy, контакты
/// обрабатывает combat core. Blade дополнительно получает tether к `wielder`.
pub fn configure_attack(
    entity: &mut EntityCommands,
    variant: WeaponVariant,
    wielder: Entity,
    config: &CombatConfig,
) {
    let scale = config.base_scale_factor;
    let shapes = &config.weapon_shapes;

    entity.insert((
        base_body(Faction::Attack),
        ActiveHooks::FILTER_CONTACT_PAIRS | ActiveHooks::FILTER_INTERSECTION_PAIR,
    ));

    match variant {
        WeaponVariant::TetheredBlade => {
            entity.insert((
                rectangle_collider(body_extent(shapes.blade, scale)),
                friction_components(config.blade_friction),
                tether_joint(wielder),
            ));
        }
        WeaponVariant::SpinningFan => {
            let radius = (shapes.fan_radius * scale).max(MIN_BODY_EXTENT);
            entity.insert((
                Collider::ball(radius),
                friction_components(config.attack_friction),
                Velocity::angular(config.fan_angular_velocity),
            ));
        }
        WeaponVariant::Cleave => {
            entity.insert((
                rectangle_collider(body_extent(shapes.cleave, scale)),
                friction_components(config.attack_friction),
                LockedAxes::ROTATION_LOCKED,
            ));
        }
        WeaponVariant::Dart => {
            entity.insert((
                rectangle_collider(body_extent(shapes.dart, scale)),
                friction_components(config.attack_friction),
            ));
        }
    }

    // Sensor: проходит сквозь тела, но контакт всё равно сообщает
    if variant.is_sensor() {
        entity.insert(Sensor);
    }
}

/// Pickup: неподвижный sensor, category = drop, mask = player.
pub fn configure_pickup(entity: &mut EntityCommands, size: BodySize, config: &CombatConfig) {
    let extent = body_extent(size, config.base_scale_factor);

    entity.insert((
        RigidBody::Fixed,
        rectangle_collider(extent),
        Sensor,
        collision_groups(Faction::Drop),
        ActiveEvents::COLLISION_EVENTS,
    ));
}
