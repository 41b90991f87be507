//! Shot cooldown gate

use serde::{Deserialize, Serialize};

/// Tracks the last accepted shot and gates the next one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotCooldown {
    pub duration_ms: u64,
    /// `None` until the first shot of the session
    last_shot_ms: Option<u64>,
}

impl ShotCooldown {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            last_shot_ms: None,
        }
    }

    pub fn last_shot_ms(&self) -> Option<u64> {
        self.last_shot_ms
    }

    /// Strictly more than the cooldown must have elapsed since the last shot
    pub fn can_fire(&self, now_ms: u64) -> bool {
        match self.last_shot_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > self.duration_ms,
        }
    }

    /// Whole seconds to show in the countdown, `None` when ready to fire
    pub fn remaining_seconds(&self, now_ms: u64) -> Option<u64> {
        if self.can_fire(now_ms) {
            return None;
        }
        let last = self.last_shot_ms?;
        let remaining_ms = self.duration_ms - now_ms.saturating_sub(last);
        Some(remaining_ms / 1000 + 1)
    }

    /// Record an accepted shot
    pub fn record_shot(&mut self, now_ms: u64) {
        self.last_shot_ms = Some(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_gate_allows_first_shot_at_zero() {
        let gate = ShotCooldown::new(3000);
        assert!(gate.can_fire(0));
        assert_eq!(gate.remaining_seconds(0), None);
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let mut gate = ShotCooldown::new(3000);
        gate.record_shot(1000);
        assert!(!gate.can_fire(1000));
        assert!(!gate.can_fire(3999));
        assert!(!gate.can_fire(4000), "exactly the cooldown is not enough");
        assert!(gate.can_fire(4001));
    }

    #[test]
    fn test_remaining_seconds_countdown() {
        let mut gate = ShotCooldown::new(3000);
        gate.record_shot(0);
        assert_eq!(gate.remaining_seconds(0), Some(4));
        assert_eq!(gate.remaining_seconds(1), Some(3));
        assert_eq!(gate.remaining_seconds(1000), Some(3));
        assert_eq!(gate.remaining_seconds(1001), Some(2));
        assert_eq!(gate.remaining_seconds(2999), Some(1));
        assert_eq!(gate.remaining_seconds(3000), Some(1));
        assert_eq!(gate.remaining_seconds(3001), None);
    }

    #[test]
    fn test_clock_behind_last_shot_stays_gated() {
        let mut gate = ShotCooldown::new(3000);
        gate.record_shot(5000);
        assert!(!gate.can_fire(4000));
        assert_eq!(gate.remaining_seconds(4000), Some(4));
    }
}
