//! Тесты детерминизма патруля
//!
//! Проверяем что симуляция с одинаковым seed даёт идентичные маршруты и позиции

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use patrol_simulation::{
    create_headless_app, generate_patrol_route, spawn_patroller, spawn_waypoint, world_snapshot,
    DeterministicRng, PatrolConfig, PatrolRoute, PatrolState, SimulationPlugin,
};

const PATROLLER_COUNT: usize = 10;
const TICK_COUNT: usize = 600;

/// Startup: seeded маршруты для всех патрульных
fn spawn_seeded_patrols(mut commands: Commands, mut rng: ResMut<DeterministicRng>) {
    for i in 0..PATROLLER_COUNT {
        let center = Vec3::new(0.0, 0.0, i as f32 * 25.0);
        let points = generate_patrol_route(&mut rng.rng, center, 4, 6.0);

        let start = points[0];
        let waypoints = points
            .into_iter()
            .map(|point| spawn_waypoint(&mut commands, point))
            .collect();

        spawn_patroller(
            &mut commands,
            start,
            PatrolRoute::new(waypoints),
            PatrolConfig::default(),
        );
    }
}

/// Запускает симуляцию и возвращает snapshot (Transform + PatrolState)
fn run_simulation(seed: u64) -> (Vec<u8>, Vec<u8>) {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / 60.0,
        )))
        .add_systems(Startup, spawn_seeded_patrols);

    for _ in 0..TICK_COUNT {
        app.update();
    }

    (
        world_snapshot::<Transform>(app.world_mut()),
        world_snapshot::<PatrolState>(app.world_mut()),
    )
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;

    let run1 = run_simulation(SEED);
    let run2 = run_simulation(SEED);

    assert_eq!(
        run1, run2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_different_seed_different_routes() {
    let (transforms_a, _) = run_simulation(1);
    let (transforms_b, _) = run_simulation(2);

    // Маршруты (Transform waypoints) зависят от seed
    assert_ne!(transforms_a, transforms_b);
}
