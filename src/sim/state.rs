//! Game session state
//!
//! One `GameSession` per run. Restarting replaces the whole value rather
//! than patching fields, so nothing from the previous run can leak through.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cooldown::ShotCooldown;
use super::spawn::SpawnScheduler;
use crate::Tuning;
use crate::physics::{BodyId, BodyKind, Physics};

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// An enemy reached the floor; waiting for restart
    GameOver,
}

/// Mutable state of one run
#[derive(Debug, Clone)]
pub struct GameSession {
    pub tuning: Tuning,
    /// Seed the RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub cooldown: ShotCooldown,
    /// A drag started on the launcher and has not been released yet
    pub is_aiming: bool,
    /// Launcher heading in degrees (0 = up, clockwise)
    pub heading_deg: f32,
    pub spawner: SpawnScheduler,
    /// Live projectiles (sorted by id)
    pub projectiles: Vec<BodyId>,
    /// Live enemies (sorted by id)
    pub enemies: Vec<BodyId>,
    /// Static floor line, absent after game over
    pub floor: Option<BodyId>,
    /// Static launcher visual, absent after game over
    pub launcher: Option<BodyId>,
    /// Completed restarts since the first session
    pub restarts: u32,
    pub rng: Pcg32,
}

impl GameSession {
    /// Start a new run and create the floor and launcher bodies.
    ///
    /// `tuning` must already have passed [`Tuning::validate`]; out-of-range
    /// spawn chances or speed bounds panic inside the spawn roll.
    pub fn new<P: Physics>(tuning: Tuning, seed: u64, physics: &mut P) -> Self {
        Self::with_restarts(tuning, seed, 0, physics)
    }

    pub(crate) fn with_restarts<P: Physics>(
        tuning: Tuning,
        seed: u64,
        restarts: u32,
        physics: &mut P,
    ) -> Self {
        let floor = physics.spawn(
            BodyKind::Floor,
            Vec2::new(tuning.canvas_width / 2.0, tuning.floor_y),
            Vec2::ZERO,
        );
        let launcher = physics.spawn(BodyKind::Launcher, tuning.launcher(), Vec2::ZERO);
        // Each restart gets its own stream so runs differ but stay reproducible
        let rng = Pcg32::seed_from_u64(seed ^ (restarts as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));

        log::info!("Session started (seed {}, restart #{})", seed, restarts);

        Self {
            cooldown: ShotCooldown::new(tuning.shot_cooldown_ms),
            spawner: SpawnScheduler::new(&tuning),
            tuning,
            seed,
            phase: GamePhase::Playing,
            score: 0,
            is_aiming: false,
            heading_deg: 0.0,
            projectiles: Vec::new(),
            enemies: Vec::new(),
            floor: Some(floor),
            launcher: Some(launcher),
            restarts,
            rng,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_projectile(&self, id: BodyId) -> bool {
        self.projectiles.binary_search(&id).is_ok()
    }

    pub fn is_enemy(&self, id: BodyId) -> bool {
        self.enemies.binary_search(&id).is_ok()
    }

    /// Create a projectile and track it
    pub fn spawn_projectile<P: Physics>(&mut self, physics: &mut P, vel: Vec2) -> BodyId {
        let id = physics.spawn(BodyKind::Projectile, self.tuning.launcher(), vel);
        insert_sorted(&mut self.projectiles, id);
        id
    }

    /// Create an enemy moving down at the speed the current score dictates
    pub fn spawn_enemy<P: Physics>(&mut self, physics: &mut P, pos: Vec2) -> BodyId {
        let speed = self.tuning.enemy_speed(self.score);
        let id = physics.spawn(BodyKind::Enemy, pos, Vec2::new(0.0, speed));
        insert_sorted(&mut self.enemies, id);
        id
    }

    /// Destroy a tracked projectile; false if it was not live
    pub fn destroy_projectile<P: Physics>(&mut self, physics: &mut P, id: BodyId) -> bool {
        match self.projectiles.binary_search(&id) {
            Ok(i) => {
                self.projectiles.remove(i);
                physics.despawn(id);
                true
            }
            Err(_) => false,
        }
    }

    /// Destroy a tracked enemy; false if it was not live
    pub fn destroy_enemy<P: Physics>(&mut self, physics: &mut P, id: BodyId) -> bool {
        match self.enemies.binary_search(&id) {
            Ok(i) => {
                self.enemies.remove(i);
                physics.despawn(id);
                true
            }
            Err(_) => false,
        }
    }

    /// Destroy every body this session owns, static visuals included
    pub fn clear_bodies<P: Physics>(&mut self, physics: &mut P) {
        let bodies = self
            .projectiles
            .drain(..)
            .chain(self.enemies.drain(..))
            .chain(self.floor.take())
            .chain(self.launcher.take());
        for id in bodies {
            physics.despawn(id);
        }
    }

    /// Positions of live enemies, in id order
    pub fn enemy_positions<'a, P: Physics>(&'a self, physics: &'a P) -> impl Iterator<Item = Vec2> + 'a {
        self.enemies.iter().filter_map(|&id| physics.position(id))
    }
}

/// Physics ids are allocated increasing, so this is almost always a push
fn insert_sorted(ids: &mut Vec<BodyId>, id: BodyId) {
    match ids.binary_search(&id) {
        Ok(_) => {}
        Err(i) => ids.insert(i, id),
    }
}
