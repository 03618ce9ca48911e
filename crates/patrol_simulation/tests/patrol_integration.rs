//! Patrol integration test
//!
//! Полный headless App (SimulationPlugin, FixedUpdate 60Hz):
//! - патрульный обходит квадрат по кругу
//! - misconfigured патрульный остаётся на месте
//! - нет паники/крашей

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use patrol_simulation::*;

/// Helper: headless App с patrol plugin и ручным временем (1 fixed step на update)
fn create_patrol_app() -> App {
    let mut app = create_headless_app(42);
    app.add_plugins(SimulationPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / 60.0,
        )));
    app
}

fn spawn_route(app: &mut App, points: &[Vec3]) -> PatrolRoute {
    let waypoints = points
        .iter()
        .map(|point| app.world_mut().spawn((Waypoint, Transform::from_translation(*point))).id())
        .collect();
    PatrolRoute::new(waypoints)
}

/// Собираем WaypointReached каждого кадра (events живут 2 update'а)
#[derive(Resource, Default)]
struct ReachedLog(Vec<WaypointReached>);

fn record_reached(mut events: EventReader<WaypointReached>, mut log: ResMut<ReachedLog>) {
    log.0.extend(events.read().cloned());
}

#[test]
fn test_square_patrol_full_laps() {
    let mut app = create_patrol_app();
    app.init_resource::<ReachedLog>()
        .add_systems(Update, record_reached);

    let corners = [
        Vec3::ZERO,
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(4.0, 0.0, 4.0),
        Vec3::new(0.0, 0.0, 4.0),
    ];
    let route = spawn_route(&mut app, &corners);
    let npc = app
        .world_mut()
        .spawn((
            Transform::from_translation(corners[0]),
            route,
            PatrolConfig {
                move_speed: 2.0,
                rotation_speed: 10.0,
                reach_threshold: 0.3,
            },
            AnimatorParams::default(),
        ))
        .id();

    // 2 круга по 16m при 2 m/s ≈ 16 sec, даём 30 sec
    for _ in 0..(60 * 30) {
        app.update();
        if app.world().resource::<ReachedLog>().0.len() >= 9 {
            break;
        }
    }

    let log = &app.world().resource::<ReachedLog>().0;
    assert!(log.len() >= 9, "reached only {} waypoints", log.len());

    // Порядок обхода строго циклический
    for (i, event) in log.iter().enumerate() {
        assert_eq!(event.entity, npc);
        assert_eq!(event.reached_index, i % corners.len());
        assert_eq!(event.next_index, (i + 1) % corners.len());
    }

    let params = app.world().get::<AnimatorParams>(npc).unwrap();
    assert_eq!(params.get_float(ANIM_PARAM_MOTION_SPEED), Some(1.0));
}

#[test]
fn test_misconfigured_patrol_stays_put() {
    let mut app = create_patrol_app();

    let npc = app
        .world_mut()
        .spawn((Transform::from_xyz(3.0, 0.0, 3.0), PatrolRoute::default()))
        .id();

    for _ in 0..120 {
        app.update();
    }

    assert_eq!(
        *app.world().get::<PatrolState>(npc).unwrap(),
        PatrolState::Disabled
    );
    assert_eq!(
        app.world().get::<Transform>(npc).unwrap().translation,
        Vec3::new(3.0, 0.0, 3.0)
    );
}

#[test]
fn test_patrollers_are_independent() {
    let mut app = create_patrol_app();

    let route_a = spawn_route(&mut app, &[Vec3::ZERO, Vec3::new(6.0, 0.0, 0.0)]);
    let route_b = spawn_route(&mut app, &[Vec3::new(0.0, 0.0, 20.0)]);

    let walker = app
        .world_mut()
        .spawn((Transform::IDENTITY, route_a))
        .id();
    let idler = app
        .world_mut()
        .spawn((Transform::from_xyz(0.0, 0.0, 20.0), route_b))
        .id();

    for _ in 0..120 {
        app.update();
    }

    let walker_pos = app.world().get::<Transform>(walker).unwrap().translation;
    assert!(walker_pos.length() > 1.0, "walker did not move: {:?}", walker_pos);
    assert_eq!(
        app.world().get::<Transform>(idler).unwrap().translation,
        Vec3::new(0.0, 0.0, 20.0)
    );
}
