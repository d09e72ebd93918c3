//! World Setup
//!
//! Resource initialization and entity spawning from tuning.

pub mod spawn;

pub use spawn::*;
