//! Per-frame simulation tick
//!
//! Order within a Playing tick: start/refresh the aim, accept or abort a
//! release, pin projectile speeds, then rebuild lane occupancy and roll
//! spawns. Contacts are resolved by the caller between ticks.

use glam::Vec2;

use super::aim::{heading_degrees, launch_velocity};
use super::normalize::normalize_all;
use super::state::{GamePhase, GameSession};
use crate::physics::{BodyId, Physics};
use crate::ui::Hud;

/// Input for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Current pointer position (screen space)
    pub pointer: Vec2,
    /// Whether the pointer button is held
    pub pointer_down: bool,
    /// Pointer pressed on the launcher since the last tick
    pub launcher_pressed: bool,
    /// Restart requested since the last tick
    pub restart: bool,
}

/// Result of a release while aiming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Fired(BodyId),
    /// Released at or above the floor line
    Aborted,
    /// Still cooling down
    OnCooldown,
    /// The run is over; nothing may be created until restart
    GameOver,
}

/// Advance the session by one frame
pub fn tick<P: Physics>(
    session: &mut GameSession,
    physics: &mut P,
    input: &TickInput,
    now_ms: u64,
) -> Hud {
    if session.phase == GamePhase::GameOver {
        if input.restart {
            restart(session, physics);
        }
        return Hud::from_session(session, now_ms);
    }

    if input.launcher_pressed {
        session.is_aiming = true;
    }

    if session.is_aiming && input.pointer_down {
        session.heading_deg = heading_degrees(session.tuning.launcher(), input.pointer);
    }

    if !input.pointer_down && session.is_aiming {
        match release(session, physics, input.pointer, now_ms) {
            Release::Fired(id) => log::debug!("Shot {:?} fired at {} ms", id, now_ms),
            Release::Aborted => log::debug!("Aim aborted above the floor line"),
            Release::OnCooldown | Release::GameOver => {}
        }
    }

    normalize_all(physics, &session.projectiles, session.tuning.projectile_speed);

    spawn_enemies(session, physics, now_ms);

    Hud::from_session(session, now_ms)
}

/// Finish an aim drag at `pointer`. Aiming ends whatever the outcome.
pub fn release<P: Physics>(
    session: &mut GameSession,
    physics: &mut P,
    pointer: Vec2,
    now_ms: u64,
) -> Release {
    session.is_aiming = false;

    if session.phase == GamePhase::GameOver {
        return Release::GameOver;
    }
    if !session.cooldown.can_fire(now_ms) {
        return Release::OnCooldown;
    }
    if pointer.y <= session.tuning.floor_y {
        return Release::Aborted;
    }

    let anchor = session.tuning.launcher();
    let vel = launch_velocity(anchor, pointer, session.tuning.projectile_speed);
    let id = session.spawn_projectile(physics, vel);
    session.cooldown.record_shot(now_ms);
    Release::Fired(id)
}

/// Rebuild lane occupancy and spawn whatever the scheduler allows
fn spawn_enemies<P: Physics>(session: &mut GameSession, physics: &mut P, now_ms: u64) {
    let positions: Vec<Vec2> = session.enemy_positions(physics).collect();
    session.spawner.refresh_occupancy(&session.tuning, positions);

    let requests = session
        .spawner
        .plan(&session.tuning, now_ms, &mut session.rng);
    for request in requests {
        let id = session.spawn_enemy(physics, request.pos);
        log::debug!("Enemy {:?} spawned in lane {}", id, request.lane);
    }
}

/// Replace a finished session with a fresh one.
///
/// Returns false (and changes nothing) while the run is still going.
pub fn restart<P: Physics>(session: &mut GameSession, physics: &mut P) -> bool {
    if session.phase != GamePhase::GameOver {
        return false;
    }
    // Anything still tracked belongs to the old run
    session.clear_bodies(physics);
    let restarts = session.restarts + 1;
    *session = GameSession::with_restarts(session.tuning.clone(), session.seed, restarts, physics);
    true
}
