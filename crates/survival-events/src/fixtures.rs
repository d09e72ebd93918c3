//! Sample data fixtures for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // survival-events = { path = "../survival-events", features = ["test-fixtures"] }
//!
//! use survival_events::fixtures;
//!
//! let events = fixtures::sample_events();
//! ```

use crate::{generate_event_id, AgentState, Event, EventKind, Gauge, SimTime, VitalsEvent};

/// Returns a short encounter: an agent spots the player, closes in, lands a
/// hit, and the player's health drops.
pub fn sample_events() -> Vec<Event> {
    vec![
        Event::new(
            generate_event_id(1),
            SimTime::new(4, 0.4),
            "agent_001",
            EventKind::StateChanged {
                from: AgentState::Patrol,
                to: AgentState::Chase,
            },
        ),
        Event::new(
            generate_event_id(2),
            SimTime::new(31, 3.1),
            "agent_001",
            EventKind::StateChanged {
                from: AgentState::Chase,
                to: AgentState::Attack,
            },
        ),
        Event::new(
            generate_event_id(3),
            SimTime::new(42, 4.2),
            "agent_001",
            EventKind::AttackLanded {
                target: "player".to_string(),
                damage: 20.0,
            },
        ),
        Event::new(
            generate_event_id(4),
            SimTime::new(42, 4.2),
            "player",
            VitalsEvent::GaugeChanged {
                gauge: Gauge::Health,
                value: 80.0,
            },
        ),
    ]
}
