//! Event Logging
//!
//! Tick-scoped event queue and the append-only JSONL writer.

pub mod logger;

pub use logger::{EventLogger, LogError, PendingEvents};
