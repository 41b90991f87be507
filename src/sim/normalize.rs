//! Projectile speed pinning
//!
//! Bounces may bleed speed, so every live projectile is rescaled to the
//! target magnitude on every tick while keeping its direction.

use glam::Vec2;

use crate::physics::{BodyId, Physics};

/// Rescale `vel` to `target` magnitude; a zero vector goes straight up
pub fn pin_speed(vel: Vec2, target: f32) -> Vec2 {
    let speed = vel.length();
    if speed == 0.0 {
        Vec2::new(0.0, -target)
    } else {
        vel * (target / speed)
    }
}

/// Pin the speed of every listed projectile
pub fn normalize_all<P: Physics>(physics: &mut P, projectiles: &[BodyId], target: f32) {
    for &id in projectiles {
        if let Some(vel) = physics.velocity(id) {
            physics.set_velocity(id, pin_speed(vel, target));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::physics::{ArcadeWorld, BodyKind};
    use proptest::prelude::*;

    #[test]
    fn test_zero_velocity_goes_straight_up() {
        assert_eq!(pin_speed(Vec2::ZERO, 150.0), Vec2::new(0.0, -150.0));
    }

    #[test]
    fn test_slowed_projectile_is_restored() {
        let v = pin_speed(Vec2::new(30.0, -40.0), 150.0);
        assert!((v - Vec2::new(90.0, -120.0)).length() < 1e-4);
    }

    #[test]
    fn test_normalize_all_skips_missing_bodies() {
        let mut world = ArcadeWorld::from_tuning(&Tuning::default());
        let a = world.spawn(BodyKind::Projectile, Vec2::new(100.0, 100.0), Vec2::new(3.0, 4.0));
        let b = world.spawn(BodyKind::Projectile, Vec2::new(200.0, 100.0), Vec2::ZERO);
        let gone = world.spawn(BodyKind::Projectile, Vec2::new(300.0, 100.0), Vec2::X);
        world.despawn(gone);

        normalize_all(&mut world, &[a, b, gone], 150.0);

        assert!((world.velocity(a).unwrap().length() - 150.0).abs() < 1e-4);
        assert_eq!(world.velocity(b), Some(Vec2::new(0.0, -150.0)));
        assert_eq!(world.velocity(gone), None);
    }

    proptest! {
        #[test]
        fn prop_pinned_speed_matches_target(
            x in -1.0e4f32..1.0e4,
            y in -1.0e4f32..1.0e4,
            target in 1.0f32..1000.0,
        ) {
            let vel = Vec2::new(x, y);
            let pinned = pin_speed(vel, target);
            prop_assert!((pinned.length() - target).abs() <= target * 1e-4);
            if vel.length() > 1e-3 {
                // Direction is preserved
                prop_assert!(pinned.normalize().dot(vel.normalize()) > 0.9999);
            }
        }
    }
}
