//! Event Flush System

use bevy_ecs::prelude::*;

use crate::events::{EventLogger, PendingEvents};

/// System: Write the tick's pending events to the event log
pub fn flush_events(mut pending: ResMut<PendingEvents>, mut logger: ResMut<EventLogger>) {
    if pending.is_empty() {
        return;
    }

    let events = pending.drain();
    if let Err(e) = logger.log_batch(&events) {
        tracing::warn!("Failed to write {} events: {}", events.len(), e);
    }
}
