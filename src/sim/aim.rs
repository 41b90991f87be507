//! Slingshot aiming
//!
//! The player presses on the launcher and pulls the pointer back; the shot
//! flies away from the pointer. Headings use the sprite convention
//! (0° = up, positive = clockwise) and are normalized to [0, 360).

use glam::Vec2;

use crate::{normalize_degrees, upward_offset};

/// Visual heading of the launcher for a pointer held at `pointer`
pub fn heading_degrees(anchor: Vec2, pointer: Vec2) -> f32 {
    let offset = upward_offset(anchor, pointer);
    // atan2 is 0 along +x and counterclockwise; flip to 0 = up, clockwise,
    // then turn around so the arrow points away from the pointer
    let toward_pointer = 90.0 - offset.y.atan2(offset.x).to_degrees();
    normalize_degrees(toward_pointer + 180.0)
}

/// Launch velocity (screen space) for a release at `release`
pub fn launch_velocity(anchor: Vec2, release: Vec2, speed: f32) -> Vec2 {
    let offset = upward_offset(anchor, release);
    let angle = offset.y.atan2(offset.x);
    Vec2::new(-speed * angle.cos(), speed * angle.sin())
}
