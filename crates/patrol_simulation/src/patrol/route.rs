//! Генерация demo маршрутов (headless binary, determinism тесты)

use bevy::prelude::*;
use rand::Rng;

/// Jitter радиуса точки кольца (доля от radius)
const RADIUS_JITTER: f32 = 0.25;

/// `count` точек на кольце вокруг `center` в плоскости XZ, радиус с jitter'ом.
///
/// Порядок = обход против часовой, так что маршрут не пересекает сам себя.
pub fn generate_patrol_route(
    rng: &mut impl Rng,
    center: Vec3,
    count: usize,
    radius: f32,
) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * std::f32::consts::TAU;
            let jitter = rng.gen_range(-RADIUS_JITTER..=RADIUS_JITTER);
            let r = radius * (1.0 + jitter);
            center + Vec3::new(angle.cos() * r, 0.0, angle.sin() * r)
        })
        .collect()
}
