//! Patrol domain: NPC обходит фиксированный список waypoints по кругу
//!
//! Содержит:
//! - PatrolRoute / PatrolConfig / PatrolState / Waypoint (components)
//! - patrol_step (plain update function, один тик)
//! - CharacterMover / AnimationSink / PatrolDebugDraw (host primitives)
//! - WaypointReached (event)
//! - PatrolPlugin (ECS driver)

use bevy::prelude::*;

pub mod animation;
pub mod components;
pub mod controller;
pub mod debug_draw;
pub mod error;
pub mod events;
pub mod mover;
pub mod route;
pub mod systems;


// Re-export основных типов
pub use animation::*;
pub use components::*;
pub use controller::{patrol_step, planar_direction, turn_factor, PatrolStep};
pub use debug_draw::*;
pub use error::*;
pub use events::*;
pub use mover::*;
pub use route::generate_patrol_route;
pub use systems::*;

/// Patrol Plugin
///
/// Регистрирует patrol системы в FixedUpdate.
/// Порядок выполнения:
/// 1. init_patrol_routes: валидация маршрута (Added/Changed PatrolRoute)
/// 2. patrol_movement: поворот + шаг + переключение waypoint'а
pub struct PatrolPlugin;

impl Plugin for PatrolPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<WaypointReached>()
            .register_type::<Waypoint>()
            .register_type::<PatrolRoute>()
            .register_type::<PatrolConfig>()
            .register_type::<PatrolState>()
            .add_systems(
                FixedUpdate,
                (systems::init_patrol_routes, systems::patrol_movement).chain(),
            );
    }
}
