//! Vitals Types
//!
//! The five survival gauges and the notifications a vitals model publishes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bounded survival resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gauge {
    Health,
    Stamina,
    Hunger,
    Thirst,
    Infection,
}

impl Gauge {
    /// Every gauge, in display order.
    pub const ALL: [Gauge; 5] = [
        Gauge::Health,
        Gauge::Stamina,
        Gauge::Hunger,
        Gauge::Thirst,
        Gauge::Infection,
    ];
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gauge::Health => "health",
            Gauge::Stamina => "stamina",
            Gauge::Hunger => "hunger",
            Gauge::Thirst => "thirst",
            Gauge::Infection => "infection",
        };
        f.write_str(name)
    }
}

/// Notification emitted after a vitals mutation has been committed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum VitalsEvent {
    /// A gauge now holds `value`
    GaugeChanged { gauge: Gauge, value: f32 },
    /// Health reached zero; published once per vitals instance
    Died,
}

impl VitalsEvent {
    /// The gauge this notification concerns, if any.
    pub fn gauge(&self) -> Option<Gauge> {
        match self {
            VitalsEvent::GaugeChanged { gauge, .. } => Some(*gauge),
            VitalsEvent::Died => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_serialization() {
        assert_eq!(serde_json::to_string(&Gauge::Health).unwrap(), r#""health""#);
        assert_eq!(serde_json::to_string(&Gauge::Infection).unwrap(), r#""infection""#);
        assert_eq!(
            serde_json::from_str::<Gauge>(r#""thirst""#).unwrap(),
            Gauge::Thirst
        );
    }

    #[test]
    fn test_vitals_event_gauge() {
        let changed = VitalsEvent::GaugeChanged { gauge: Gauge::Hunger, value: 3.0 };
        assert_eq!(changed.gauge(), Some(Gauge::Hunger));
        assert_eq!(VitalsEvent::Died.gauge(), None);
    }

    #[test]
    fn test_vitals_event_tagging() {
        let json = serde_json::to_string(&VitalsEvent::Died).unwrap();
        assert_eq!(json, r#"{"notice":"died"}"#);
    }
}
