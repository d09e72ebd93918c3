//! Player Combat System

use bevy_ecs::prelude::*;

use crate::combat::PlayerCombat;
use crate::components::SimClock;

/// System: Count down attack recovery
pub fn tick_player_combat(clock: Res<SimClock>, mut query: Query<&mut PlayerCombat>) {
    for mut combat in query.iter_mut() {
        if combat.is_recovering() {
            combat.tick(clock.dt);
        }
    }
}
