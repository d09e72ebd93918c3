//! Vitals System
//!
//! Advances every set of survival gauges and forwards their notifications.

use bevy_ecs::prelude::*;

use crate::components::{Label, SimClock};
use crate::events::PendingEvents;
use crate::vitals::Vitals;

/// System: Advance vitals by one tick and queue their notifications
///
/// Runs after agent evaluation so damage dealt this tick is reported in the
/// same batch as the tick's regeneration and decay.
pub fn advance_vitals(
    clock: Res<SimClock>,
    mut pending: ResMut<PendingEvents>,
    mut query: Query<(&Label, &mut Vitals)>,
) {
    for (label, mut vitals) in query.iter_mut() {
        vitals.advance(clock.dt);
        for event in vitals.drain_events() {
            pending.record(clock.now, &label.0, event);
        }
    }
}
