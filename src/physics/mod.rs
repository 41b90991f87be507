//! Physics capability
//!
//! The simulation never integrates motion or tests shapes itself. It asks a
//! [`Physics`] implementation to create bodies, read and impose velocities,
//! and receives [`Contact`] events back from whoever steps the world.

pub mod arcade;

pub use arcade::{ArcadeWorld, CollisionResult, WorldConfig, circle_overlap, reflect_velocity};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque handle to a body owned by the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// What a body represents to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Projectile,
    Enemy,
    /// Static floor line
    Floor,
    /// Static launcher visual
    Launcher,
}

impl BodyKind {
    /// Static bodies never move and ignore imposed velocities
    pub fn is_static(self) -> bool {
        matches!(self, BodyKind::Floor | BodyKind::Launcher)
    }
}

/// Discrete contact events reported by the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    ProjectileFloor { projectile: BodyId },
    ProjectileEnemy { projectile: BodyId, enemy: BodyId },
    EnemyFloor { enemy: BodyId },
}

/// Body management the simulation relies on
pub trait Physics {
    /// Create a body and return its id
    fn spawn(&mut self, kind: BodyKind, pos: Vec2, vel: Vec2) -> BodyId;
    /// Remove a body; false if it was already gone
    fn despawn(&mut self, id: BodyId) -> bool;
    fn position(&self, id: BodyId) -> Option<Vec2>;
    fn velocity(&self, id: BodyId) -> Option<Vec2>;
    /// Impose a velocity; false if the body does not exist
    fn set_velocity(&mut self, id: BodyId, vel: Vec2) -> bool;
}
