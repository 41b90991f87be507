//! Data-driven game balance
//!
//! Every gameplay constant can be overridden from a JSON document. Missing
//! fields fall back to the values in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors that can occur while loading tuning data.
#[derive(Debug)]
pub enum TuningError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON deserialization error.
    Json(serde_json::Error),
    /// Parsed fine but a value is out of range.
    Invalid(String),
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "IO error: {e}"),
            TuningError::Json(e) => write!(f, "JSON error: {e}"),
            TuningError::Invalid(msg) => write!(f, "invalid tuning: {msg}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Json(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Json(e)
    }
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play area ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub launcher_x: f32,
    pub launcher_y: f32,
    pub floor_y: f32,

    // === Shooting ===
    pub projectile_speed: f32,
    pub shot_cooldown_ms: u64,

    // === Spawning ===
    pub lane_count: usize,
    pub lane_width: f32,
    pub lane_spawn_cooldown_ms: u64,
    pub spawn_chance_per_tick: f64,
    pub enemy_spawn_y: f32,
    pub min_topmost_spawn_y: f32,

    // === Enemy speed ===
    pub enemy_min_speed: f32,
    pub enemy_max_speed: f32,
    pub enemy_speed_score_divisor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            launcher_x: LAUNCHER_X,
            launcher_y: LAUNCHER_Y,
            floor_y: FLOOR_Y,

            projectile_speed: PROJECTILE_SPEED,
            shot_cooldown_ms: SHOT_COOLDOWN_MS,

            lane_count: LANE_COUNT,
            lane_width: LANE_WIDTH,
            lane_spawn_cooldown_ms: LANE_SPAWN_COOLDOWN_MS,
            spawn_chance_per_tick: SPAWN_CHANCE_PER_TICK,
            enemy_spawn_y: ENEMY_SPAWN_Y,
            min_topmost_spawn_y: MIN_TOPMOST_SPAWN_Y,

            enemy_min_speed: ENEMY_MIN_SPEED,
            enemy_max_speed: ENEMY_MAX_SPEED,
            enemy_speed_score_divisor: ENEMY_SPEED_SCORE_DIVISOR,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: &str| Err(TuningError::Invalid(msg.to_string()));

        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return invalid("canvas dimensions must be positive");
        }
        if !(self.floor_y > 0.0 && self.floor_y < self.canvas_height) {
            return invalid("floor_y must lie inside the canvas");
        }
        if self.lane_count == 0 {
            return invalid("lane_count must be at least 1");
        }
        if !(self.lane_width > 0.0) {
            return invalid("lane_width must be positive");
        }
        if !(0.0..=1.0).contains(&self.spawn_chance_per_tick) {
            return invalid("spawn_chance_per_tick must be within [0, 1]");
        }
        if !(self.projectile_speed > 0.0) {
            return invalid("projectile_speed must be positive");
        }
        if !(self.enemy_min_speed <= self.enemy_max_speed) {
            return invalid("enemy_min_speed must not exceed enemy_max_speed");
        }
        if !(self.enemy_speed_score_divisor > 0.0) {
            return invalid("enemy_speed_score_divisor must be positive");
        }
        Ok(())
    }

    /// Launcher position (aim anchor and projectile origin)
    #[inline]
    pub fn launcher(&self) -> Vec2 {
        Vec2::new(self.launcher_x, self.launcher_y)
    }

    /// Lane index for a horizontal position, clamped into the lane table
    pub fn lane_of(&self, x: f32) -> usize {
        let lane = (x / self.lane_width).floor();
        if lane <= 0.0 {
            0
        } else {
            (lane as usize).min(self.lane_count - 1)
        }
    }

    /// Horizontal center of a lane
    #[inline]
    pub fn lane_center_x(&self, lane: usize) -> f32 {
        (lane as f32 + 0.5) * self.lane_width
    }

    /// Enemy descent speed for the current score (monotonic, clamped)
    pub fn enemy_speed(&self, score: u64) -> f32 {
        (score as f32 / self.enemy_speed_score_divisor)
            .clamp(self.enemy_min_speed, self.enemy_max_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "lane_count": 4, "shot_cooldown_ms": 500 }"#).unwrap();
        assert_eq!(tuning.lane_count, 4);
        assert_eq!(tuning.shot_cooldown_ms, 500);
        assert_eq!(tuning.projectile_speed, PROJECTILE_SPEED);
        assert_eq!(tuning.floor_y, FLOOR_Y);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "lane_count": 0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "spawn_chance_per_tick": 1.5 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "enemy_min_speed": 60.0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Tuning::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_lane_of_clamps() {
        let tuning = Tuning::default();
        assert_eq!(tuning.lane_of(0.0), 0);
        assert_eq!(tuning.lane_of(79.9), 0);
        assert_eq!(tuning.lane_of(80.0), 1);
        assert_eq!(tuning.lane_of(799.0), 9);
        assert_eq!(tuning.lane_of(800.0), 9);
        assert_eq!(tuning.lane_of(-5.0), 0);
        assert_eq!(tuning.lane_center_x(3), 280.0);
    }

    #[test]
    fn test_enemy_speed_clamped_and_monotonic() {
        let tuning = Tuning::default();
        assert_eq!(tuning.enemy_speed(0), 10.0);
        assert_eq!(tuning.enemy_speed(100), 10.0);
        assert_eq!(tuning.enemy_speed(250), 25.0);
        assert_eq!(tuning.enemy_speed(10_000), 50.0);

        let mut last = 0.0;
        for score in (0..1000).step_by(10) {
            let speed = tuning.enemy_speed(score);
            assert!(speed >= last);
            last = speed;
        }
    }
}
