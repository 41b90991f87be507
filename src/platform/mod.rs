//! Platform abstraction layer
//!
//! Capabilities the simulation consumes but does not own:
//! - Time (monotonic milliseconds)
//! - Input events (pointer and keyboard)

pub mod input;
pub mod time;

pub use input::{InputCollector, InputEvent};
pub use time::{Clock, FixedStepClock};
