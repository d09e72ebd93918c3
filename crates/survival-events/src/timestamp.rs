//! Simulation Time
//!
//! Tick-based simulation time with the accumulated elapsed seconds.
//!
//! # Example
//!
//! ```
//! use survival_events::SimTime;
//!
//! let mut time = SimTime::start();
//! time.advance(0.5);
//! time.advance(0.5);
//! assert_eq!(time.tick, 2);
//! assert_eq!(time.to_string(), "tick_2@1.000s");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in simulation time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed ticks
    pub tick: u64,
    /// Sum of every tick's elapsed time, in seconds
    pub seconds: f64,
}

impl SimTime {
    /// Creates a SimTime at an explicit tick and elapsed time.
    pub fn new(tick: u64, seconds: f64) -> Self {
        Self { tick, seconds }
    }

    /// The moment before the first tick.
    pub fn start() -> Self {
        Self::default()
    }

    /// Records one completed tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.seconds += f64::from(dt);
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick_{}@{:.3}s", self.tick, self.seconds)
    }
}
