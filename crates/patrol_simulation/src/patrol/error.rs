//! Ошибки патруля

use thiserror::Error;

/// Ошибки конфигурации/исполнения патруля.
///
/// Ни одна из них не роняет симуляцию: driver логирует и
/// либо выключает патруль (MisconfiguredPatrol), либо пропускает тик (MissingWaypoint).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatrolError {
    /// Пустой список waypoints, патруль невозможен
    #[error("no patrol waypoints assigned")]
    MisconfiguredPatrol,

    /// Текущий target waypoint был despawned
    #[error("patrol waypoint #{index} no longer exists")]
    MissingWaypoint { index: usize },
}

pub type PatrolResult<T> = Result<T, PatrolError>;
