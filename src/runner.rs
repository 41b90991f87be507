//! Frame driver
//!
//! Owns the session, the arcade world, the clock and the input collector.
//! Each frame: step physics, resolve the contacts it reported, then tick the
//! session. Contacts therefore always land between two ticks.

use crate::{Tuning, TuningError};
use crate::physics::ArcadeWorld;
use crate::platform::{Clock, InputCollector, InputEvent};
use crate::sim::{ContactOutcome, GameSession, resolve_contacts, tick};
use crate::ui::Hud;

/// Summary of one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub now_ms: u64,
    pub outcomes: Vec<ContactOutcome>,
    pub hud: Hud,
}

pub struct Runner<C: Clock> {
    session: GameSession,
    world: ArcadeWorld,
    clock: C,
    input: InputCollector,
}

impl<C: Clock> Runner<C> {
    /// Validate `tuning` and start the first session
    pub fn new(tuning: Tuning, seed: u64, clock: C) -> Result<Self, TuningError> {
        tuning.validate()?;
        let mut world = ArcadeWorld::from_tuning(&tuning);
        let input = InputCollector::new(tuning.launcher());
        let session = GameSession::new(tuning, seed, &mut world);
        Ok(Self {
            session,
            world,
            clock,
            input,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn world(&self) -> &ArcadeWorld {
        &self.world
    }

    /// Mutable access for scripted scenarios
    pub fn parts_mut(&mut self) -> (&mut GameSession, &mut ArcadeWorld) {
        (&mut self.session, &mut self.world)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Queue a raw input event for the next frame
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame after `dt` seconds of physics time
    pub fn frame(&mut self, dt: f32) -> Frame {
        let contacts = self.world.step(dt);
        let outcomes = resolve_contacts(&mut self.session, &mut self.world, contacts);

        let now_ms = self.clock.now_ms();
        let input = self.input.take();
        let hud = tick(&mut self.session, &mut self.world, &input, now_ms);

        Frame {
            now_ms,
            outcomes,
            hud,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FixedStepClock;
    use crate::sim::GamePhase;

    #[test]
    fn test_frame_ticks_with_clock_time() {
        let tuning = Tuning {
            spawn_chance_per_tick: 0.0,
            ..Default::default()
        };
        let mut runner = Runner::new(tuning, 1, FixedStepClock::new(16)).unwrap();
        runner.clock().advance();
        let frame = runner.frame(runner.clock().step_secs());
        assert_eq!(frame.now_ms, 16);
        assert!(frame.outcomes.is_empty());
        assert_eq!(frame.hud.phase, GamePhase::Playing);
        assert_eq!(frame.hud.score_line, "Score: 0");
    }

    #[test]
    fn test_rejects_unvalidated_tuning() {
        let tuning = Tuning {
            spawn_chance_per_tick: 2.0,
            ..Default::default()
        };
        let result = Runner::new(tuning, 1, FixedStepClock::new(16));
        assert!(matches!(result, Err(TuningError::Invalid(_))));

        let tuning = Tuning {
            enemy_min_speed: 80.0,
            ..Default::default()
        };
        assert!(Runner::new(tuning, 1, FixedStepClock::new(16)).is_err());
    }
}
