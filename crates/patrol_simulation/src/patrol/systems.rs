//! Patrol systems (ECS driver для patrol_step)

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::animation::AnimatorParams;
use super::components::{PatrolConfig, PatrolRoute, PatrolState, Waypoint};
use super::controller::patrol_step;
use super::error::PatrolError;
use super::events::WaypointReached;
use super::mover::{DirectMover, RapierMover};

/// Система: (ре)инициализация патруля при добавлении/замене маршрута
///
/// Пустой маршрут → warning + Disabled (тик становится no-op).
pub fn init_patrol_routes(
    mut patrollers: Query<(Entity, &PatrolRoute, &mut PatrolState), Changed<PatrolRoute>>,
) {
    for (entity, route, mut state) in patrollers.iter_mut() {
        match PatrolState::initialize(route.len()) {
            Ok(initialized) => {
                *state = initialized;
                crate::log(&format!(
                    "🧭 Patrol {:?}: route with {} waypoints, heading to #0",
                    entity,
                    route.len()
                ));
            }
            Err(err) => {
                crate::log_warning(&format!("⚠️ Patrol {:?}: {}, patrol disabled", entity, err));
                *state = PatrolState::Disabled;
            }
        }
    }
}

/// Система: тик патруля
///
/// Для каждого Active патрульного:
/// - читает позицию текущего waypoint'а (Transform waypoint entity)
/// - patrol_step через RapierMover (если есть KinematicCharacterController) или DirectMover
/// - пишет animation сигнал в AnimatorParams (если есть)
/// - генерирует WaypointReached при переключении target
pub fn patrol_movement(
    time: Res<Time>,
    mut patrollers: Query<(
        Entity,
        &PatrolRoute,
        &PatrolConfig,
        &mut PatrolState,
        &mut Transform,
        Option<&mut KinematicCharacterController>,
        Option<&mut AnimatorParams>,
    )>,
    waypoints: Query<&Transform, (With<Waypoint>, Without<PatrolRoute>)>,
    mut reached_events: EventWriter<WaypointReached>,
) {
    let delta = time.delta_secs();

    for (entity, route, config, mut state, mut transform, character_controller, animator) in
        patrollers.iter_mut()
    {
        let Some(index) = state.current_index() else {
            continue;
        };

        let target = route
            .waypoints
            .get(index)
            .and_then(|waypoint| waypoints.get(*waypoint).ok())
            .map(|waypoint_transform| waypoint_transform.translation);

        let Some(target) = target else {
            // Waypoint despawned: пропускаем тик, патруль остаётся Active
            crate::log(&format!(
                "Patrol {:?}: {}",
                entity,
                PatrolError::MissingWaypoint { index }
            ));
            continue;
        };

        let step = match character_controller {
            Some(mut controller) => patrol_step(
                &mut state,
                config,
                delta,
                target,
                &mut transform,
                &mut RapierMover::new(&mut controller),
            ),
            None => patrol_step(
                &mut state,
                config,
                delta,
                target,
                &mut transform,
                &mut DirectMover,
            ),
        };

        let Some(step) = step else {
            continue;
        };

        if let Some(mut params) = animator {
            step.animation.apply(&mut *params);
        }

        if let Some(next_index) = step.reached {
            reached_events.write(WaypointReached {
                entity,
                reached_index: index,
                next_index,
            });
        }
    }
}

/// Spawn helper: waypoint entity (только Transform + маркер)
pub fn spawn_waypoint(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((Waypoint, Transform::from_translation(position)))
        .id()
}

/// Spawn helper: headless патрульный (DirectMover, без Rapier)
pub fn spawn_patroller(
    commands: &mut Commands,
    position: Vec3,
    route: PatrolRoute,
    config: PatrolConfig,
) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            route,
            config,
            AnimatorParams::default(),
        ))
        .id()
}

/// Spawn helper: kinematic патрульный с коллизиями
///
/// Создает entity с полным набором компонентов:
/// - Transform + PatrolRoute/PatrolConfig/PatrolState + AnimatorParams
/// - Rapier: RigidBody::KinematicPositionBased + Collider (capsule) + KinematicCharacterController
pub fn spawn_patrol_character(
    commands: &mut Commands,
    position: Vec3,
    route: PatrolRoute,
    config: PatrolConfig,
) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            route,
            config,
            AnimatorParams::default(),
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.5, 0.4), // Высота 1.0m (0.5 + 0.5), радиус 0.4m
            KinematicCharacterController::default(),
        ))
        .id()
}
