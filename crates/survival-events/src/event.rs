//! Event Types
//!
//! The logged event envelope shared by the simulation and its consumers.

use serde::{Deserialize, Serialize};

use crate::agent::AgentState;
use crate::timestamp::SimTime;
use crate::vitals::{Gauge, VitalsEvent};

/// What happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum EventKind {
    /// A survival gauge changed value
    GaugeChanged { gauge: Gauge, value: f32 },
    /// The subject's health reached zero
    Died,
    /// An agent switched behavior mode
    StateChanged { from: AgentState, to: AgentState },
    /// An agent struck its target
    AttackLanded { target: String, damage: f32 },
}

impl From<VitalsEvent> for EventKind {
    fn from(event: VitalsEvent) -> Self {
        match event {
            VitalsEvent::GaugeChanged { gauge, value } => EventKind::GaugeChanged { gauge, value },
            VitalsEvent::Died => EventKind::Died,
        }
    }
}

/// One line of the event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier (e.g., "evt_00000042")
    pub event_id: String,
    /// When the event occurred
    pub timestamp: SimTime,
    /// Label of the entity the event is about (e.g., "player", "agent_003")
    pub subject: String,
    /// Payload, flattened next to the envelope fields
    #[serde(flatten)]
    pub kind: EventKind,
}

impl Event {
    /// Create a new event.
    pub fn new(
        event_id: impl Into<String>,
        timestamp: SimTime,
        subject: impl Into<String>,
        kind: impl Into<EventKind>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            timestamp,
            subject: subject.into(),
            kind: kind.into(),
        }
    }

    /// Returns true for death events.
    pub fn is_death(&self) -> bool {
        matches!(self.kind, EventKind::Died)
    }

    /// Serializes the event to a single JSON line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes an event from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Generates an event ID with the given sequence number.
pub fn generate_event_id(sequence: u64) -> String {
    format!("evt_{:08}", sequence)
}
