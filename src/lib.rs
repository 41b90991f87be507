//! Lane Shooter - a slingshot arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic game-state machine (aim, cooldown, spawning, scoring)
//! - `physics`: Physics capability seam plus a small arcade world
//! - `platform`: Clock and input capabilities
//! - `tuning`: Data-driven game balance
//! - `ui`: Score and info text handed to the display layer
//! - `runner`: Frame driver wiring everything together

pub mod physics;
pub mod platform;
pub mod runner;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (screen space, y grows downward)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Launcher (arrow) position, also the aim anchor
    pub const LAUNCHER_X: f32 = 400.0;
    pub const LAUNCHER_Y: f32 = 500.0;

    /// Floor line; releases must happen strictly below it to fire
    pub const FLOOR_Y: f32 = 515.0;

    /// Projectile speed magnitude (pixels/s), pinned every tick
    pub const PROJECTILE_SPEED: f32 = 150.0;
    /// Minimum time between shots
    pub const SHOT_COOLDOWN_MS: u64 = 3000;

    /// Enemy lanes
    pub const LANE_COUNT: usize = 10;
    pub const LANE_WIDTH: f32 = 80.0;
    /// Minimum time between two spawns in the same lane
    pub const LANE_SPAWN_COOLDOWN_MS: u64 = 1000;
    /// Bernoulli chance per eligible lane per tick
    pub const SPAWN_CHANCE_PER_TICK: f64 = 0.0005;

    /// Spawn row for new enemies
    pub const ENEMY_SPAWN_Y: f32 = 15.0;
    /// A lane whose topmost enemy is at or above this y is considered blocked
    pub const MIN_TOPMOST_SPAWN_Y: f32 = 40.0;

    /// Enemy descent speed clamp (pixels/s)
    pub const ENEMY_MIN_SPEED: f32 = 10.0;
    pub const ENEMY_MAX_SPEED: f32 = 50.0;
    /// Enemy speed = score / divisor before clamping
    pub const ENEMY_SPEED_SCORE_DIVISOR: f32 = 10.0;

    /// Score awarded per enemy destroyed by a projectile
    pub const ENEMY_REWARD: u64 = 10;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Screen-space offset from `anchor` to `point` with y flipped to point up
#[inline]
pub fn upward_offset(anchor: Vec2, point: Vec2) -> Vec2 {
    Vec2::new(point.x - anchor.x, anchor.y - point.y)
}
