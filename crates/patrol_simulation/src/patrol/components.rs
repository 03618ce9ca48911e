//! Patrol компоненты: маршрут, параметры движения, состояние контроллера

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{PatrolError, PatrolResult};

/// Маркер waypoint entity
///
/// Позиция waypoint = его Transform. Патруль только читает её, никогда не пишет.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Waypoint;

/// Маршрут патруля: упорядоченный список waypoint entities
///
/// Non-owning ссылки: despawn waypoint'а не трогает патрульного,
/// driver просто не найдёт Transform.
///
/// Автоматически добавляет PatrolState + PatrolConfig через Required Components.
/// Замена маршрута (insert нового PatrolRoute) = реинициализация (index → 0).
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(PatrolState, PatrolConfig)]
pub struct PatrolRoute {
    pub waypoints: Vec<Entity>,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Entity>) -> Self {
        Self { waypoints }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

/// Параметры движения патрульного
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct PatrolConfig {
    /// Скорость движения (m/s)
    pub move_speed: f32,
    /// Агрессивность поворота: slerp factor = rotation_speed * delta (clamp [0, 1]).
    /// НЕ угловая скорость.
    pub rotation_speed: f32,
    /// Дистанция, с которой waypoint считается достигнутым (строго меньше)
    pub reach_threshold: f32,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            rotation_speed: 5.0,
            reach_threshold: 0.2,
        }
    }
}

/// Состояние контроллера патруля
///
/// Pending → Active (маршрут валиден) | Disabled (маршрут пуст).
/// Active крутится бесконечно, терминального состояния нет.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum PatrolState {
    /// Маршрут ещё не проверен (сразу после спавна)
    Pending,

    /// Патрулируем
    Active {
        /// Текущий target, всегда в [0, route_len)
        current_index: usize,
        route_len: usize,
    },

    /// Misconfigured: тик ничего не делает
    Disabled,
}

impl Default for PatrolState {
    fn default() -> Self {
        Self::Pending
    }
}

impl PatrolState {
    /// Проверить маршрут и начать с waypoint #0
    pub fn initialize(route_len: usize) -> PatrolResult<Self> {
        if route_len == 0 {
            return Err(PatrolError::MisconfiguredPatrol);
        }

        Ok(Self::Active {
            current_index: 0,
            route_len,
        })
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn current_index(&self) -> Option<usize> {
        match self {
            Self::Active { current_index, .. } => Some(*current_index),
            _ => None,
        }
    }

    /// Переключиться на следующий waypoint (cyclic), вернуть новый index
    pub fn advance(&mut self) -> Option<usize> {
        let Self::Active { current_index, route_len } = self else {
            return None;
        };

        *current_index = (*current_index + 1) % *route_len;
        Some(*current_index)
    }
}
