//! Контроллер патруля: один тик движения к текущему waypoint'у
//!
//! Plain update function вместо lifecycle компонента движка:
//! state + config + pose на вход, изменённый pose + PatrolStep на выход.
//! ECS driver (systems.rs) вызывает её раз в FixedUpdate для каждого патрульного.
//!
//! Цикл: face-and-advance → arrived (switch target) → repeat

use bevy::prelude::*;

use super::animation::AnimationSignal;
use super::components::{PatrolConfig, PatrolState};
use super::mover::CharacterMover;

/// Порог "нулевого" направления (squared length)
pub const MIN_DIRECTION_LENGTH_SQ: f32 = 1e-10;

/// Результат одного тика патруля
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolStep {
    /// Запрошенное у mover'а смещение (ZERO если стояли на waypoint'е)
    pub displacement: Vec3,
    /// Сигнал для animation driver
    pub animation: AnimationSignal,
    /// Новый target index, если в этом тике дошли до waypoint'а
    pub reached: Option<usize>,
}

/// Slerp factor поворота за тик, всегда в [0, 1] (overshoot невозможен)
pub fn turn_factor(rotation_speed: f32, delta: f32) -> f32 {
    (rotation_speed * delta).clamp(0.0, 1.0)
}

/// Направление к target в плоскости XZ (вертикаль игнорируем)
pub fn planar_direction(from: Vec3, to: Vec3) -> Vec3 {
    let mut direction = to - from;
    direction.y = 0.0;
    direction
}

/// Один тик патруля.
///
/// 1. Поворот к target (slerp, factor = rotation_speed * delta), если направление ненулевое
/// 2. Шаг вперёд по (ещё поворачивающемуся) forward через mover
/// 3. distance < reach_threshold → следующий waypoint (mod route_len)
///
/// Если уже стоим внутри reach_threshold, не двигаемся (только смотрим на target):
/// single-waypoint маршрут так idle'ится на точке без осцилляции.
///
/// Возвращает None (ничего не трогая) если state не Active.
pub fn patrol_step<M: CharacterMover>(
    state: &mut PatrolState,
    config: &PatrolConfig,
    delta: f32,
    target: Vec3,
    transform: &mut Transform,
    mover: &mut M,
) -> Option<PatrolStep> {
    if !state.is_active() {
        return None;
    }

    let direction = planar_direction(transform.translation, target);

    if direction.length_squared() > MIN_DIRECTION_LENGTH_SQ {
        let target_rotation = Transform::IDENTITY.looking_to(direction, Vec3::Y).rotation;
        transform.rotation = transform
            .rotation
            .slerp(target_rotation, turn_factor(config.rotation_speed, delta));
    }

    let holding = transform.translation.distance(target) < config.reach_threshold;

    let (displacement, animation) = if holding {
        (Vec3::ZERO, AnimationSignal::holding())
    } else {
        let displacement = transform.forward() * (config.move_speed * delta);
        mover.move_character(transform, displacement);
        (displacement, AnimationSignal::moving(config.move_speed))
    };

    let reached = if transform.translation.distance(target) < config.reach_threshold {
        state.advance()
    } else {
        None
    };

    Some(PatrolStep {
        displacement,
        animation,
        reached,
    })
}
