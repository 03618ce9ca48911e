//! Debug визуализация маршрута (только debug/tooling слой)
//!
//! Никогда не вызывается из тика патруля. Client реализует PatrolDebugDraw через Gizmos,
//! тесты/tooling собирают примитивы в Vec<DebugPrimitive>.

use bevy::prelude::*;

/// Радиус сферы waypoint'а
pub const WAYPOINT_GIZMO_RADIUS: f32 = 0.2;

/// Debug-draw примитив host'а
pub trait PatrolDebugDraw {
    /// Сфера на позиции waypoint'а
    fn waypoint(&mut self, position: Vec3, radius: f32);
    /// Сегмент маршрута между соседними waypoints
    fn route_segment(&mut self, from: Vec3, to: Vec3);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebugPrimitive {
    Waypoint { position: Vec3, radius: f32 },
    RouteSegment { from: Vec3, to: Vec3 },
}

impl PatrolDebugDraw for Vec<DebugPrimitive> {
    fn waypoint(&mut self, position: Vec3, radius: f32) {
        self.push(DebugPrimitive::Waypoint { position, radius });
    }

    fn route_segment(&mut self, from: Vec3, to: Vec3) {
        self.push(DebugPrimitive::RouteSegment { from, to });
    }
}

/// Нарисовать маршрут: сферы на waypoints + замкнутая ломаная.
///
/// `None` = despawned waypoint: его сфера и оба сегмента пропускаются.
pub fn draw_patrol_route(waypoints: &[Option<Vec3>], draw: &mut impl PatrolDebugDraw) {
    if waypoints.is_empty() {
        return;
    }

    for position in waypoints.iter().flatten() {
        draw.waypoint(*position, WAYPOINT_GIZMO_RADIUS);
    }

    for (i, current) in waypoints.iter().enumerate() {
        let next = waypoints[(i + 1) % waypoints.len()];
        if let (Some(from), Some(to)) = (current, next) {
            draw.route_segment(*from, to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_route_draws_nothing() {
        let mut primitives: Vec<DebugPrimitive> = Vec::new();
        draw_patrol_route(&[], &mut primitives);
        assert!(primitives.is_empty());
    }

    #[test]
    fn test_route_is_closed_loop() {
        let a = Vec3::ZERO;
        let b = Vec3::new(10.0, 0.0, 0.0);
        let c = Vec3::new(10.0, 0.0, 10.0);

        let mut primitives: Vec<DebugPrimitive> = Vec::new();
        draw_patrol_route(&[Some(a), Some(b), Some(c)], &mut primitives);

        let spheres = primitives
            .iter()
            .filter(|p| matches!(p, DebugPrimitive::Waypoint { .. }))
            .count();
        assert_eq!(spheres, 3);

        // c → a замыкает маршрут
        assert!(primitives.contains(&DebugPrimitive::RouteSegment { from: c, to: a }));
        assert!(primitives.contains(&DebugPrimitive::RouteSegment { from: a, to: b }));
        assert!(primitives.contains(&DebugPrimitive::RouteSegment { from: b, to: c }));
    }

    #[test]
    fn test_missing_waypoint_skips_adjacent_segments() {
        let a = Vec3::ZERO;
        let c = Vec3::new(10.0, 0.0, 10.0);

        let mut primitives: Vec<DebugPrimitive> = Vec::new();
        draw_patrol_route(&[Some(a), None, Some(c)], &mut primitives);

        assert_eq!(
            primitives,
            vec![
                DebugPrimitive::Waypoint { position: a, radius: WAYPOINT_GIZMO_RADIUS },
                DebugPrimitive::Waypoint { position: c, radius: WAYPOINT_GIZMO_RADIUS },
                DebugPrimitive::RouteSegment { from: c, to: a },
            ]
        );
    }

    #[test]
    fn test_single_waypoint_self_segment() {
        let a = Vec3::new(1.0, 0.0, 1.0);
        let mut primitives: Vec<DebugPrimitive> = Vec::new();
        draw_patrol_route(&[Some(a)], &mut primitives);

        assert_eq!(primitives.len(), 2);
        assert_eq!(primitives[1], DebugPrimitive::RouteSegment { from: a, to: a });
    }
}
