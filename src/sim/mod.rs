//! Deterministic game-state machine
//!
//! All gameplay decisions live here. This module must stay deterministic:
//! - Time comes in as an argument, never read from the host
//! - Seeded RNG only
//! - Stable iteration order (by body id)
//! - Bodies are reached only through the `Physics` trait

pub mod aim;
pub mod autopilot;
pub mod collision;
pub mod cooldown;
pub mod normalize;
pub mod spawn;
pub mod state;
pub mod tick;

pub use aim::{heading_degrees, launch_velocity};
pub use autopilot::Autopilot;
pub use collision::{ContactOutcome, resolve_contact, resolve_contacts};
pub use cooldown::ShotCooldown;
pub use normalize::{normalize_all, pin_speed};
pub use spawn::{SpawnRequest, SpawnScheduler};
pub use state::{GamePhase, GameSession};
pub use tick::{Release, TickInput, release, restart, tick};
