//! Animation sink: named float параметры для внешнего animation driver
//!
//! Вместо hash'ей параметров (engine-specific оптимизация) передаём имена.
//! Host реализация сама решает, кешировать ли id параметров.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Blend-параметр скорости движения (m/s)
pub const ANIM_PARAM_SPEED: &str = "Speed";
/// Blend-параметр скорости проигрывания locomotion
pub const ANIM_PARAM_MOTION_SPEED: &str = "MotionSpeed";

/// Получатель animation параметров (host animator)
pub trait AnimationSink {
    fn set_float(&mut self, name: &str, value: f32);
}

/// Сигнал для animation driver, выдаётся каждым тиком патруля
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSignal {
    pub speed: f32,
    pub motion_speed: f32,
}

impl AnimationSignal {
    /// Идём к waypoint'у
    pub fn moving(speed: f32) -> Self {
        Self {
            speed,
            motion_speed: 1.0,
        }
    }

    /// Стоим на waypoint'е (single-waypoint маршрут)
    pub fn holding() -> Self {
        Self {
            speed: 0.0,
            motion_speed: 1.0,
        }
    }

    pub fn apply(&self, sink: &mut impl AnimationSink) {
        sink.set_float(ANIM_PARAM_SPEED, self.speed);
        sink.set_float(ANIM_PARAM_MOTION_SPEED, self.motion_speed);
    }
}

/// Дефолтный ECS animation sink: хранилище float параметров
///
/// Опционален: патрульный без AnimatorParams просто не выдаёт animation сигнал.
#[derive(Component, Debug, Clone, Default)]
pub struct AnimatorParams {
    floats: HashMap<String, f32>,
}

impl AnimatorParams {
    pub fn get_float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }
}

impl AnimationSink for AnimatorParams {
    fn set_float(&mut self, name: &str, value: f32) {
        if let Some(slot) = self.floats.get_mut(name) {
            *slot = value;
        } else {
            self.floats.insert(name.to_owned(), value);
        }
    }
}
