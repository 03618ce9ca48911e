use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use patrol_simulation::{
    init_logger, spawn_patrol_character, spawn_waypoint, PatrolConfig, PatrolRoute,
    SimulationPlugin,
};

mod rendering;
mod camera;

use rendering::{NeedsVisual, RenderingSyncPlugin};
use camera::{CameraFocus, CameraPlugin};

fn main() {
    init_logger();

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Patrol - NPC waypoint demo".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Rapier: KinematicCharacterController двигает патрульного с коллизиями
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        // Simulation (patrol ECS logic)
        .add_plugins(SimulationPlugin)
        // Visuals + debug gizmos (F3)
        .add_plugins(RenderingSyncPlugin)
        // Camera controls
        .add_plugins(CameraPlugin)
        .add_systems(Startup, setup_scene)
        .run();
}

/// Ground, lights, 3 waypoints (треугольник) + патрульный
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Ground plane (30x30m) + collider, чтобы capsule sweep было обо что упираться
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(15.0)))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
        Transform::from_xyz(5.0, 0.0, 5.0),
        Collider::cuboid(15.0, 0.05, 15.0),
    ));

    // Ящик на пути между waypoint #1 и #2: Rapier разрешает коллизию, патрульный скользит вдоль
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.5, 0.3, 0.2))),
        Transform::from_xyz(10.8, 0.5, 5.0),
        Collider::cuboid(0.5, 0.5, 0.5),
    ));

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4)),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
        affects_lightmapped_meshes: false,
    });

    // Camera (orbit вокруг центра маршрута)
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(20.0, 15.0, 20.0).looking_at(Vec3::new(5.0, 0.0, 5.0), Vec3::Y),
        camera::OrbitCamera {
            focus: Vec3::new(5.0, 0.0, 5.0),
            ..default()
        },
    ));

    // Waypoints: высота = центр capsule над полом (~0.95m), иначе distance по Y никогда не < reach_threshold
    let waypoints = [
        Vec3::new(0.0, 0.95, 0.0),
        Vec3::new(10.0, 0.95, 0.0),
        Vec3::new(10.0, 0.95, 10.0),
    ]
    .into_iter()
    .map(|position| spawn_waypoint(&mut commands, position))
    .collect();

    let npc = spawn_patrol_character(
        &mut commands,
        Vec3::new(0.0, 0.95, 0.0),
        PatrolRoute::new(waypoints),
        PatrolConfig {
            reach_threshold: 0.3,
            ..default()
        },
    );

    commands.entity(npc).insert((NeedsVisual, CameraFocus, Visibility::default()));
}
