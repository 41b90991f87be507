//! Pointer and keyboard input capability
//!
//! Raw events arrive in any order between frames; the collector folds them
//! into a single [`TickInput`] per tick.

use glam::Vec2;

use crate::sim::TickInput;

/// Default clickable radius around the launcher
pub const LAUNCHER_HIT_RADIUS: f32 = 24.0;

/// Raw input events delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved(Vec2),
    PointerDown(Vec2),
    PointerUp(Vec2),
    KeyUp(char),
}

/// Accumulates input events into the next tick's input
#[derive(Debug, Clone)]
pub struct InputCollector {
    launcher: Vec2,
    hit_radius: f32,
    pending: TickInput,
}

impl InputCollector {
    pub fn new(launcher: Vec2) -> Self {
        Self::with_hit_radius(launcher, LAUNCHER_HIT_RADIUS)
    }

    pub fn with_hit_radius(launcher: Vec2, hit_radius: f32) -> Self {
        Self {
            launcher,
            hit_radius,
            pending: TickInput {
                pointer: launcher,
                ..Default::default()
            },
        }
    }

    /// Feed one raw event
    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved(pos) => {
                self.pending.pointer = pos;
            }
            InputEvent::PointerDown(pos) => {
                self.pending.pointer = pos;
                self.pending.pointer_down = true;
                if pos.distance(self.launcher) <= self.hit_radius {
                    self.pending.launcher_pressed = true;
                }
            }
            InputEvent::PointerUp(pos) => {
                self.pending.pointer = pos;
                self.pending.pointer_down = false;
            }
            InputEvent::KeyUp('r' | 'R') => {
                self.pending.restart = true;
            }
            InputEvent::KeyUp(_) => {}
        }
    }

    /// Input for the next tick; one-shot flags are cleared afterwards
    pub fn take(&mut self) -> TickInput {
        let input = self.pending.clone();
        self.pending.launcher_pressed = false;
        self.pending.restart = false;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_on_launcher_is_one_shot() {
        let launcher = Vec2::new(400.0, 500.0);
        let mut input = InputCollector::new(launcher);

        input.push(InputEvent::PointerDown(Vec2::new(405.0, 498.0)));
        let first = input.take();
        assert!(first.launcher_pressed);
        assert!(first.pointer_down);

        let second = input.take();
        assert!(!second.launcher_pressed);
        assert!(second.pointer_down, "held state persists across ticks");
    }

    #[test]
    fn test_press_off_launcher_does_not_start_aim() {
        let mut input = InputCollector::new(Vec2::new(400.0, 500.0));
        input.push(InputEvent::PointerDown(Vec2::new(100.0, 100.0)));
        let tick = input.take();
        assert!(!tick.launcher_pressed);
        assert!(tick.pointer_down);
    }

    #[test]
    fn test_release_tracks_position() {
        let mut input = InputCollector::new(Vec2::new(400.0, 500.0));
        input.push(InputEvent::PointerDown(Vec2::new(400.0, 500.0)));
        input.push(InputEvent::PointerMoved(Vec2::new(380.0, 560.0)));
        input.push(InputEvent::PointerUp(Vec2::new(370.0, 580.0)));
        let tick = input.take();
        assert!(!tick.pointer_down);
        assert_eq!(tick.pointer, Vec2::new(370.0, 580.0));
    }

    #[test]
    fn test_restart_key() {
        let mut input = InputCollector::new(Vec2::ZERO);
        input.push(InputEvent::KeyUp('x'));
        assert!(!input.take().restart);
        input.push(InputEvent::KeyUp('R'));
        assert!(input.take().restart);
        assert!(!input.take().restart);
    }
}
