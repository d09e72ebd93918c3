//! Event Logger
//!
//! Append-only JSONL event logging.

use bevy_ecs::prelude::*;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use survival_events::{generate_event_id, Event, EventKind, SimTime};
use thiserror::Error;

/// Event log error type
#[derive(Debug, Error)]
pub enum LogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Resource for logging events to a JSONL file
#[derive(Resource)]
pub struct EventLogger {
    writer: Option<BufWriter<File>>,
    event_count: u64,
}

impl EventLogger {
    /// Create a new event logger writing to the specified path
    pub fn new(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            event_count: 0,
        })
    }

    /// Create a logger that discards events
    pub fn null() -> Self {
        Self {
            writer: None,
            event_count: 0,
        }
    }

    /// Number of events logged so far
    pub fn event_count(&self) -> u64 {
        self.event_count
    }

    /// Log an event to the file
    pub fn log(&mut self, event: &Event) -> Result<(), LogError> {
        self.event_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = event.to_jsonl()?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// Log multiple events
    pub fn log_batch(&mut self, events: &[Event]) -> Result<(), LogError> {
        for event in events {
            self.log(event)?;
        }
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> Result<(), LogError> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for EventLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush event logger: {}", e);
        }
    }
}

/// Events produced during the current tick, waiting to be logged
#[derive(Resource, Default)]
pub struct PendingEvents {
    events: Vec<Event>,
    next_sequence: u64,
}

impl PendingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an event under the next sequential id
    pub fn record(&mut self, timestamp: SimTime, subject: &str, kind: impl Into<EventKind>) {
        self.next_sequence += 1;
        let id = generate_event_id(self.next_sequence);
        self.events.push(Event::new(id, timestamp, subject, kind));
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Events queued so far this tick
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufRead;
    use survival_events::fixtures::sample_events;
    use survival_events::{AgentState, Gauge, VitalsEvent};

    #[test]
    fn test_event_logging() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");

        let mut logger = EventLogger::new(&path).unwrap();
        let events = sample_events();
        logger.log_batch(&events).unwrap();
        logger.flush().unwrap();
        assert_eq!(logger.event_count(), events.len() as u64);

        let file = File::open(&path).unwrap();
        let lines: Vec<String> = std::io::BufReader::new(file)
            .lines()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines.len(), events.len());

        let parsed = Event::from_jsonl(&lines[0]).unwrap();
        assert_eq!(parsed, events[0]);
    }

    #[test]
    fn test_logger_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        std::fs::write(&path, "stale\nlines\n").unwrap();

        {
            let mut logger = EventLogger::new(&path).unwrap();
            logger.log(&sample_events()[0]).unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EventLogger::new(dir.path().join("missing").join("events.jsonl")).err();
        assert!(matches!(err, Some(LogError::Io(_))));
    }

    #[test]
    fn test_null_logger() {
        let mut logger = EventLogger::null();
        logger.log_batch(&sample_events()).unwrap();
        logger.flush().unwrap();
        assert_eq!(logger.event_count(), 4);
    }

    #[test]
    fn test_pending_events_assign_sequential_ids() {
        let mut pending = PendingEvents::new();
        assert!(pending.is_empty());

        let now = SimTime::new(1, 0.05);
        pending.record(
            now,
            "agent_001",
            EventKind::StateChanged {
                from: AgentState::Patrol,
                to: AgentState::Chase,
            },
        );
        pending.record(
            now,
            "player",
            VitalsEvent::GaugeChanged {
                gauge: Gauge::Health,
                value: 80.0,
            },
        );
        assert_eq!(pending.len(), 2);
        assert_eq!(pending.events()[1].subject, "player");

        let drained = pending.drain();
        assert_eq!(drained[0].event_id, "evt_00000001");
        assert_eq!(drained[1].event_id, "evt_00000002");
        assert!(pending.is_empty());

        // Ids keep counting across drains
        pending.record(now, "player", VitalsEvent::Died);
        assert_eq!(pending.drain()[0].event_id, "evt_00000003");
    }
}
