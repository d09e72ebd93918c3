//! Survival Simulation Library
//!
//! Enemy behavior and player survival for a zombie survival game, usable
//! standalone or through the bundled `bevy_ecs` systems.
//!
//! - [`ai`]: per-agent Patrol / Chase / Attack / Wait state machine
//! - [`vitals`]: health, stamina, hunger, thirst and infection
//! - [`combat`], [`inventory`], [`locomotion`]: player gameplay
//! - [`capabilities`]: the navigation, damage, presentation and physics
//!   interfaces the cores call into

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

pub mod ai;
pub mod capabilities;
pub mod combat;
pub mod components;
pub mod config;
pub mod events;
pub mod inventory;
pub mod locomotion;
pub mod setup;
pub mod systems;
pub mod vitals;

pub use ai::{AgentController, AgentTick, TargetView};
pub use capabilities::{DamageVolume, Damageable, Navigation, NoPresentation, Presentation};
pub use components::*;
pub use config::{ConfigError, Tuning};
pub use events::{EventLogger, LogError, PendingEvents};
pub use setup::{build_world, get_spawn_summary, PLAYER_LABEL};
pub use systems::build_schedule;
pub use vitals::Vitals;

/// Seeded random number generator resource
#[derive(Resource)]
pub struct SimRng(pub SmallRng);
