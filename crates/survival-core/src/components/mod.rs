//! ECS Components
//!
//! Components and resources for the player, enemy agents and the clock.

pub mod nav;
pub mod presentation;
pub mod world;

pub use nav::*;
pub use presentation::*;
pub use world::*;
