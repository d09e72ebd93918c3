//! Shared event types and serialization for the survival simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod agent;
pub mod event;
pub mod timestamp;
pub mod vitals;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

pub use agent::{AgentKind, AgentState};
pub use event::{generate_event_id, Event, EventKind};
pub use timestamp::SimTime;
pub use vitals::{Gauge, VitalsEvent};
