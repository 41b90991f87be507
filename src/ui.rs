//! Text handed to the display layer each tick

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameSession};

pub const PROMPT_IDLE: &str = "Hold the mouse down on the arrow.";
pub const PROMPT_AIMING: &str = "Drag to aim and release below the line to shoot!";
pub const PROMPT_RESTART: &str = "Game over! Press [r] to restart.";

/// Everything the UI layer needs to draw the overlay for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub score_line: String,
    pub info_line: String,
    pub phase: GamePhase,
    pub score: u64,
    pub heading_deg: f32,
}

impl Hud {
    pub fn from_session(session: &GameSession, now_ms: u64) -> Self {
        let (score_line, info_line) = match session.phase {
            GamePhase::Playing => (
                format!("Score: {}", session.score),
                info_line(session, now_ms),
            ),
            GamePhase::GameOver => (
                PROMPT_RESTART.to_string(),
                format!("You scored {} points.", session.score),
            ),
        };
        Self {
            score_line,
            info_line,
            phase: session.phase,
            score: session.score,
            heading_deg: session.heading_deg,
        }
    }
}

fn info_line(session: &GameSession, now_ms: u64) -> String {
    if let Some(secs) = session.cooldown.remaining_seconds(now_ms) {
        let unit = if secs == 1 { "second" } else { "seconds" };
        format!("Cooldown until next shot: {} {}.", secs, unit)
    } else if session.is_aiming {
        PROMPT_AIMING.to_string()
    } else {
        PROMPT_IDLE.to_string()
    }
}
