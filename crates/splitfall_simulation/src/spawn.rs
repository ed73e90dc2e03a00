//! Spawn layer: создание игрока, врагов, атак и pickups с готовыми телами.
//!
//! Replacement враги ("split on defeat") появляются в случайной точке
//! квадрата `spawn_distance` вокруг игрока (seeded RNG → детерминизм).

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::combat::events::EnemySpawnRequested;
use crate::combat::roster::ActiveEnemies;
use crate::components::{
    ArchetypeKey, Attack, AttackUid, Enemy, EquipmentKey, Pickup, PickupKind, Player, Power, WeaponVariant,
};
use crate::config::{BodySize, CombatConfig};
use crate::physics::{configure_attack, configure_enemy, configure_pickup, configure_player};
use crate::DeterministicRng;

/// Archetype key, если в конфиге список врагов пуст.
const FALLBACK_ENEMY_KEY: &str = "enemy";

pub fn spawn_player(commands: &mut Commands, config: &CombatConfig, position: Vec2) -> Entity {
    let mut entity = commands.spawn((
        Player,
        Power(config.player_power),
        ArchetypeKey::new(config.player_key.clone()),
        Transform::from_translation(position.extend(0.0)),
    ));
    configure_player(&mut entity, config);

    let id = entity.id();
    crate::logger::log_info(&format!("🧍 Player {:?} spawned at {:?}", id, position));
    id
}

/// Враг с телом; сразу числится в `ActiveEnemies`.
pub fn spawn_enemy(
    commands: &mut Commands,
    enemies: &mut ActiveEnemies,
    config: &CombatConfig,
    key: &str,
    power: u32,
    position: Vec2,
) -> Entity {
    let mut entity = commands.spawn((
        Enemy,
        Power(power),
        ArchetypeKey::new(key),
        Transform::from_translation(position.extend(0.0)),
    ));
    configure_enemy(&mut entity, config);

    let id = entity.id();
    enemies.insert(id);
    crate::logger::log(&format!("👾 Enemy {:?} '{}' (power {}) at {:?}", id, key, power, position));
    id
}

/// Тело атаки в позиции wielder. Blade сразу на tether.
pub fn spawn_attack(
    commands: &mut Commands,
    config: &CombatConfig,
    uid: AttackUid,
    wielder: Entity,
    position: Vec2,
    variant: WeaponVariant,
    equipment: EquipmentKey,
) -> Entity {
    let mut entity = commands.spawn((
        Attack::new(uid, equipment, variant, wielder),
        Transform::from_translation(position.extend(0.0)),
    ));
    configure_attack(&mut entity, variant, wielder, config);
    entity.id()
}

pub fn spawn_pickup(
    commands: &mut Commands,
    config: &CombatConfig,
    kind: PickupKind,
    size: BodySize,
    position: Vec2,
) -> Entity {
    let mut entity = commands.spawn((Pickup::new(kind), Transform::from_translation(position.extend(0.0))));
    configure_pickup(&mut entity, size, config);
    entity.id()
}

/// Случайная точка в квадрате `center ± distance`.
pub fn random_spawn_position(rng: &mut impl Rng, center: Vec2, distance: f32) -> Vec2 {
    if distance <= 0.0 {
        return center;
    }
    Vec2::new(
        rng.gen_range(center.x - distance..=center.x + distance),
        rng.gen_range(center.y - distance..=center.y + distance),
    )
}

pub fn random_enemy_key(rng: &mut impl Rng, config: &CombatConfig) -> String {
    config
        .enemy_keys
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| FALLBACK_ENEMY_KEY.to_string())
}

/// Система: EnemySpawnRequested → новый враг рядом с игроком.
pub fn spawn_requested_enemies(
    mut requests: EventReader<EnemySpawnRequested>,
    mut commands: Commands,
    config: Res<CombatConfig>,
    mut rng: ResMut<DeterministicRng>,
    mut enemies: ResMut<ActiveEnemies>,
    players: Query<&Transform, With<Player>>,
) {
    let center = players
        .iter()
        .next()
        .map(|t| t.translation.truncate().floor())
        .unwrap_or(Vec2::ZERO);
    let distance = config.scaled(config.spawn_distance);

    for request in requests.read() {
        let key = random_enemy_key(&mut rng.rng, &config);
        let position = random_spawn_position(&mut rng.rng, center, distance);
        spawn_enemy(&mut commands, &mut enemies, &config, &key, request.power, position);
    }
}

/// Startup система: игрок в начале координат + первый враг.
pub fn start_encounter(
    mut commands: Commands,
    config: Res<CombatConfig>,
    mut rng: ResMut<DeterministicRng>,
    mut enemies: ResMut<ActiveEnemies>,
) {
    spawn_player(&mut commands, &config, Vec2::ZERO);

    let key = random_enemy_key(&mut rng.rng, &config);
    let position = random_spawn_position(&mut rng.rng, Vec2::ZERO, config.scaled(config.spawn_distance));
    spawn_enemy(&mut commands, &mut enemies, &config, &key, config.base_enemy_power, position);
}
