//! Patrol events

use bevy::prelude::*;

/// Event: патрульный дошёл до waypoint'а и переключился на следующий
///
/// Генерируется: patrol_movement (FixedUpdate)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct WaypointReached {
    pub entity: Entity,
    /// Index достигнутого waypoint'а
    pub reached_index: usize,
    /// Новый target index ((reached_index + 1) mod len)
    pub next_index: usize,
}
