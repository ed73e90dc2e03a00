//! Headless симуляция Splitfall
//!
//! Запускает Bevy App без рендера: игрок с Rapier телом бросает dart в
//! ближайшего врага, поверженные враги делятся надвое.
//!
//! Usage: `splitfall_simulation [config.json]`

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;
use splitfall_simulation::spawn::start_encounter;
use splitfall_simulation::*;

/// Раз в сколько тиков игрок бросает dart
const THROW_INTERVAL_TICKS: u32 = 30;

fn main() {
    let seed = 42;
    init_logger();
    log_info(&format!("Starting Splitfall headless simulation (seed: {})", seed));

    let config = match std::env::args().nth(1) {
        Some(path) => match CombatConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log_error(&format!("ERROR: {}, falling back to defaults", err));
                CombatConfig::default()
            }
        },
        None => CombatConfig::default(),
    };

    let mut app = create_headless_app(seed);
    // Каждый update продвигает время ровно на один fixed tick (60 Hz)
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)))
        .insert_resource(config)
        .add_plugins((TransformPlugin, SimulationPlugin, PhysicsBackendPlugin::default()))
        .add_systems(Startup, start_encounter)
        .add_systems(FixedUpdate, throw_at_nearest_enemy.before(combat::systems::use_weapons));

    // Запускаем 1000 тиков симуляции
    for tick in 0..1000 {
        app.update();

        if tick % 100 == 0 {
            let entity_count = app.world().entities().len();
            let stats = app.world().resource::<EncounterStats>();
            log_info(&format!(
                "Tick {}: {} entities, {} enemies defeated",
                tick, entity_count, stats.enemies_defeated
            ));
        }
    }

    log_info("Simulation complete!");
}

/// Demo "input": периодический бросок в ближайшего активного врага.
fn throw_at_nearest_enemy(
    mut ticks: Local<u32>,
    players: Query<(Entity, &Transform), With<Player>>,
    enemies: Query<&Transform, (With<Enemy>, Without<Defeated>)>,
    mut intents: EventWriter<UseWeaponIntent>,
) {
    *ticks += 1;
    if *ticks % THROW_INTERVAL_TICKS != 0 {
        return;
    }

    let Some((player, player_transform)) = players.iter().next() else {
        return;
    };
    let origin = player_transform.translation.truncate();

    let nearest = enemies
        .iter()
        .map(|t| t.translation.truncate())
        .min_by(|a, b| a.distance_squared(origin).total_cmp(&b.distance_squared(origin)));

    if let Some(target) = nearest {
        intents.write(UseWeaponIntent::new(player, WeaponVariant::Dart, target - origin));
    }
}
