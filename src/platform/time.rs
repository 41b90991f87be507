//! Monotonic clock capability
//!
//! The simulation never reads wall time directly; callers pass `now` into
//! each tick, usually from one of these clocks.

use std::cell::Cell;

/// Source of monotonic time in milliseconds
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Clock that only moves when told to, one fixed frame at a time.
///
/// Drives headless runs and tests at a steady frame rate independent of
/// how fast the host actually executes them.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    now: Cell<u64>,
    step_ms: u64,
}

impl FixedStepClock {
    pub fn new(step_ms: u64) -> Self {
        Self::starting_at(0, step_ms)
    }

    pub fn starting_at(start_ms: u64, step_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
            step_ms,
        }
    }

    /// Frame length in milliseconds
    pub fn step_ms(&self) -> u64 {
        self.step_ms
    }

    /// Frame length in seconds (for physics integration)
    pub fn step_secs(&self) -> f32 {
        self.step_ms as f32 / 1000.0
    }

    /// Advance by one frame and return the new time
    pub fn advance(&self) -> u64 {
        self.advance_by(self.step_ms)
    }

    pub fn advance_by(&self, ms: u64) -> u64 {
        let next = self.now.get().saturating_add(ms);
        self.now.set(next);
        next
    }
}

impl Clock for FixedStepClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_advance() {
        let clock = FixedStepClock::new(16);
        assert_eq!(clock.now_ms(), 0);
        assert_eq!(clock.advance(), 16);
        assert_eq!(clock.advance(), 32);
        assert_eq!(clock.advance_by(1000), 1032);
        assert_eq!(clock.now_ms(), 1032);
        assert!((clock.step_secs() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_starting_offset() {
        let clock = FixedStepClock::starting_at(5000, 10);
        assert_eq!(clock.now_ms(), 5000);
        clock.advance();
        assert_eq!(clock.now_ms(), 5010);
    }
}
