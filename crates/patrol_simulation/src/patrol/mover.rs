//! Collision-aware mover (host primitive)
//!
//! Архитектура:
//! - Контроллер патруля считает желаемое смещение (forward * speed * dt)
//! - Mover решает, как его применить:
//!   - DirectMover: напрямую в Transform (headless, без Rapier)
//!   - RapierMover: в KinematicCharacterController, capsule sweep делает Rapier physics step

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Host primitive: применить смещение персонажа
pub trait CharacterMover {
    /// Применить `displacement`, вернуть то, что реально применено к Transform прямо сейчас
    fn move_character(&mut self, transform: &mut Transform, displacement: Vec3) -> Vec3;
}

/// Прямая интеграция displacement → Transform.translation (headless режим)
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectMover;

impl CharacterMover for DirectMover {
    fn move_character(&mut self, transform: &mut Transform, displacement: Vec3) -> Vec3 {
        transform.translation += displacement;
        displacement
    }
}

/// Смещение через Rapier KinematicCharacterController
///
/// Transform не трогаем: Rapier разрешит коллизии и запишет позицию в physics step.
/// Если FixedUpdate отработал несколько раз за кадр, смещения суммируются.
pub struct RapierMover<'a> {
    pub controller: &'a mut KinematicCharacterController,
}

impl<'a> RapierMover<'a> {
    pub fn new(controller: &'a mut KinematicCharacterController) -> Self {
        Self { controller }
    }
}

impl CharacterMover for RapierMover<'_> {
    fn move_character(&mut self, _transform: &mut Transform, displacement: Vec3) -> Vec3 {
        let queued = self.controller.translation.unwrap_or(Vec3::ZERO);
        self.controller.translation = Some(queued + displacement);
        Vec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_mover_applies_displacement() {
        let mut transform = Transform::from_xyz(1.0, 0.0, 1.0);
        let applied = DirectMover.move_character(&mut transform, Vec3::new(0.5, 0.0, -0.5));

        assert_eq!(applied, Vec3::new(0.5, 0.0, -0.5));
        assert_eq!(transform.translation, Vec3::new(1.5, 0.0, 0.5));
    }

    #[test]
    fn test_rapier_mover_queues_and_accumulates() {
        let mut controller = KinematicCharacterController::default();
        let mut transform = Transform::from_xyz(0.0, 0.0, 0.0);

        {
            let mut mover = RapierMover::new(&mut controller);
            mover.move_character(&mut transform, Vec3::X * 0.1);
            mover.move_character(&mut transform, Vec3::X * 0.1);
        }

        // Transform не тронут: позицию пишет Rapier
        assert_eq!(transform.translation, Vec3::ZERO);
        let queued = controller.translation.expect("translation queued");
        assert!((queued.x - 0.2).abs() < 1e-6, "queued = {:?}", queued);
    }
}
