//! Headless симуляция патруля
//!
//! Спавнит несколько патрульных на seeded маршрутах и гоняет 1000 тиков без рендера

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use patrol_simulation::{
    create_headless_app, generate_patrol_route, spawn_patroller, spawn_waypoint, DeterministicRng,
    PatrolConfig, PatrolRoute, PatrolState, SimulationPlugin, WaypointReached,
};

const PATROLLER_COUNT: usize = 4;
const WAYPOINTS_PER_ROUTE: usize = 5;

fn main() {
    let seed = 42;
    println!("Starting patrol headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        // Один FixedUpdate шаг на app.update()
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / 60.0,
        )))
        .add_systems(Startup, spawn_patrol_routes);

    let mut reached_total = 0;
    for tick in 0..1000 {
        app.update();

        reached_total += app
            .world()
            .resource::<Events<WaypointReached>>()
            .iter_current_update_events()
            .count();

        if tick % 100 == 0 {
            let world = app.world_mut();
            let mut states = world.query::<&PatrolState>();
            let active = states.iter(world).filter(|state| state.is_active()).count();
            println!(
                "Tick {}: {} active patrollers, {} waypoints reached",
                tick, active, reached_total
            );
        }
    }

    println!("Simulation complete!");
}

/// Startup: seeded маршруты вокруг точек на оси X
fn spawn_patrol_routes(mut commands: Commands, mut rng: ResMut<DeterministicRng>) {
    for i in 0..PATROLLER_COUNT {
        let center = Vec3::new(i as f32 * 30.0, 0.0, 0.0);
        let points = generate_patrol_route(&mut rng.rng, center, WAYPOINTS_PER_ROUTE, 8.0);

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
