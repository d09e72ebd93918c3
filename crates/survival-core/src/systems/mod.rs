//! ECS Systems
//!
//! Per-tick systems, run in order: agent evaluation, steering, player
//! combat recovery, vitals, then event flushing.

pub mod ai;
pub mod combat;
pub mod events;
pub mod navigation;
pub mod vitals;

pub use ai::evaluate_agents;
pub use combat::tick_player_combat;
pub use events::flush_events;
pub use navigation::steer_nav_agents;
pub use vitals::advance_vitals;

use bevy_ecs::prelude::*;

/// Builds the per-tick schedule with every system in order
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            evaluate_agents,
            steer_nav_agents,
            tick_player_combat,
            advance_vitals,
            flush_events,
        )
            .chain(),
    );
    schedule
}
