//! Entity Spawning
//!
//! Builds a ready-to-run world: shared resources, the player, and every
//! configured agent targeting the player.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::fmt;

use crate::ai::AgentController;
use crate::combat::PlayerCombat;
use crate::components::{AgentTarget, AnimatorSignals, Label, NavAgent, Player, Pose, SimClock};
use crate::config::Tuning;
use crate::events::{EventLogger, PendingEvents};
use crate::vitals::Vitals;
use crate::SimRng;

/// Subject name of the player in the event stream
pub const PLAYER_LABEL: &str = "player";

/// Creates a world with the clock, seeded RNG, event queue and `logger`
/// installed, then spawns the player and the configured agents.
///
/// Returns the world and the player entity.
pub fn build_world(tuning: &Tuning, seed: u64, logger: EventLogger) -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(SimClock::new(tuning.simulation.dt));
    world.insert_resource(SimRng(SmallRng::seed_from_u64(seed)));
    world.insert_resource(PendingEvents::new());
    world.insert_resource(logger);

    let player = spawn_player(&mut world, tuning);
    spawn_agents(&mut world, tuning, player);
    (world, player)
}

/// Spawns the player at the origin with fresh vitals and no weapon
pub fn spawn_player(world: &mut World, tuning: &Tuning) -> Entity {
    world
        .spawn((
            Player,
            Label::new(PLAYER_LABEL),
            Pose::default(),
            Vitals::new(tuning.vitals.clone()),
            PlayerCombat::new(tuning.combat.clone()),
        ))
        .id()
}

/// Spawns one agent per `[[spawn]]` entry, each hunting `target`
pub fn spawn_agents(world: &mut World, tuning: &Tuning, target: Entity) -> Vec<Entity> {
    let agent = &tuning.agent;
    tuning
        .spawns
        .iter()
        .enumerate()
        .map(|(index, spawn)| {
            let position = spawn.position;
            let controller = AgentController::new(spawn.kind, agent.clone(), position);
            let nav = NavAgent::new(
                position,
                controller.base_speed(),
                agent.stopping_distance,
                tuning.simulation.arena_radius,
            );
            let entity = world
                .spawn((
                    Label::agent(index + 1),
                    AgentTarget(Some(target)),
                    controller,
                    Pose::at(position),
                    nav,
                    AnimatorSignals::default(),
                ))
                .id();
            tracing::debug!(kind = %spawn.kind, ?position, "spawned agent");
            entity
        })
        .collect()
}

/// Count spawned agents by kind
pub fn get_spawn_summary(world: &mut World) -> SpawnSummary {
    let mut by_kind = BTreeMap::new();
    let mut query = world.query::<&AgentController>();
    for controller in query.iter(world) {
        *by_kind.entry(controller.kind().to_string()).or_insert(0) += 1;
    }

    SpawnSummary {
        total_agents: by_kind.values().sum(),
        by_kind,
    }
}

/// Summary of spawned agents
#[derive(Debug)]
pub struct SpawnSummary {
    pub total_agents: u32,
    pub by_kind: BTreeMap<String, u32>,
}

impl fmt::Display for SpawnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} agents", self.total_agents)?;
        for (kind, count) in &self.by_kind {
            write!(f, ", {} {}", count, kind)?;
        }
        Ok(())
    }
}
