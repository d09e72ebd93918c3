//! Enemy AI
//!
//! Per-agent finite state machine driving patrol, chase and attack behavior.

pub mod controller;
pub mod patrol;

pub use controller::{AgentController, AgentTick, TargetView};
pub use patrol::random_in_unit_sphere;
