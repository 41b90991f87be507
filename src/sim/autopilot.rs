//! Scripted player for demo runs
//!
//! Presses the launcher, pulls back away from the enemy closest to the
//! floor and lets go, one step per frame. Restarts as soon as a run ends.

use glam::Vec2;

use super::state::GameSession;
use crate::physics::Physics;
use crate::platform::InputEvent;

/// How far the pointer is pulled back from the launcher
pub const PULL_DISTANCE: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Idle,
    Dragging { pull: Vec2 },
    Releasing { pull: Vec2 },
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    stage: Stage,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self { stage: Stage::Idle }
    }

    /// Input events to deliver before the next tick
    pub fn events<P: Physics>(&mut self, session: &GameSession, physics: &P, now_ms: u64) -> Vec<InputEvent> {
        if session.is_over() {
            self.stage = Stage::Idle;
            return vec![InputEvent::KeyUp('r')];
        }

        let anchor = session.tuning.launcher();
        match self.stage {
            Stage::Idle => {
                if !session.cooldown.can_fire(now_ms) {
                    return Vec::new();
                }
                match pick_target(session, physics) {
                    Some(target) => {
                        self.stage = Stage::Dragging {
                            pull: pull_point(session, target),
                        };
                        vec![InputEvent::PointerDown(anchor)]
                    }
                    None => Vec::new(),
                }
            }
            Stage::Dragging { pull } => {
                self.stage = Stage::Releasing { pull };
                vec![InputEvent::PointerMoved(pull)]
            }
            Stage::Releasing { pull } => {
                self.stage = Stage::Idle;
                vec![InputEvent::PointerUp(pull)]
            }
        }
    }
}

/// The enemy nearest the floor
fn pick_target<P: Physics>(session: &GameSession, physics: &P) -> Option<Vec2> {
    session
        .enemy_positions(physics)
        .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
}

/// Where to release so the shot flies toward `target`
fn pull_point(session: &GameSession, target: Vec2) -> Vec2 {
    let anchor = session.tuning.launcher();
    let dir = (target - anchor).normalize_or(Vec2::NEG_Y);
    let mut pull = anchor - dir * PULL_DISTANCE;
    // Shallow shots would be released above the floor line and abort
    pull.y = pull.y.max(session.tuning.floor_y + 1.0);
    pull
}
