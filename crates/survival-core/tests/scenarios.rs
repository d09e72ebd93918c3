//! End-to-end scenarios
//!
//! Drives full worlds through the tick schedule and checks the behavior
//! visible in components and in the written event log.

use bevy_ecs::prelude::*;
use glam::Vec3;
use survival_core::config::{SpawnConfig, Tuning};
use survival_core::{
    build_schedule, build_world, AgentController, EventLogger, NavAgent, Pose, SimClock, Vitals,
};
use survival_events::{AgentKind, AgentState, Event, EventKind, Gauge};

fn single_walker(dt: f32) -> Tuning {
    let mut tuning = Tuning::default();
    tuning.simulation.dt = dt;
    tuning.spawns = vec![SpawnConfig {
        kind: AgentKind::Walker,
        position: Vec3::ZERO,
    }];
    tuning
}

fn no_agents(dt: f32) -> Tuning {
    let mut tuning = Tuning::default();
    tuning.simulation.dt = dt;
    tuning.spawns.clear();
    tuning
}

fn tick(world: &mut World, schedule: &mut Schedule) {
    world.resource_mut::<SimClock>().advance();
    schedule.run(world);
}

fn agent_entity(world: &mut World) -> Entity {
    let mut query = world.query_filtered::<Entity, With<AgentController>>();
    query.single(world)
}

/// Places the player `distance` units from the agent along +X
fn place_player(world: &mut World, player: Entity, agent: Entity, distance: f32) {
    let agent_position = world.get::<Pose>(agent).unwrap().position;
    world.get_mut::<Pose>(player).unwrap().position = agent_position + Vec3::X * distance;
}

fn read_log(path: &std::path::Path) -> Vec<Event> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| Event::from_jsonl(line).unwrap())
        .collect()
}

fn state_changes(events: &[Event]) -> Vec<(AgentState, AgentState)> {
    events
        .iter()
        .filter_map(|e| match e.kind {
            EventKind::StateChanged { from, to } => Some((from, to)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_walker_engagement() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");

    let tuning = single_walker(0.5);
    let (mut world, player) = build_world(&tuning, 42, EventLogger::new(&path).unwrap());
    let agent = agent_entity(&mut world);
    let mut schedule = build_schedule();

    place_player(&mut world, player, agent, 15.0);
    tick(&mut world, &mut schedule);
    assert_eq!(world.get::<AgentController>(agent).unwrap().state(), AgentState::Patrol);

    place_player(&mut world, player, agent, 8.0);
    tick(&mut world, &mut schedule);
    assert_eq!(world.get::<AgentController>(agent).unwrap().state(), AgentState::Chase);
    assert_eq!(world.get::<NavAgent>(agent).unwrap().speed(), 5.0);

    place_player(&mut world, player, agent, 1.5);
    tick(&mut world, &mut schedule);
    let controller = world.get::<AgentController>(agent).unwrap();
    assert_eq!(controller.state(), AgentState::Attack);
    assert_eq!(controller.attack_cooldown_remaining(), 1.0);

    // One second of cooldown at dt = 0.5
    for _ in 0..2 {
        place_player(&mut world, player, agent, 1.5);
        tick(&mut world, &mut schedule);
        assert_eq!(world.get::<Vitals>(player).unwrap().level(Gauge::Health), 100.0);
    }

    place_player(&mut world, player, agent, 1.5);
    tick(&mut world, &mut schedule);
    assert_eq!(world.get::<Vitals>(player).unwrap().level(Gauge::Health), 80.0);
    assert_eq!(
        world.get::<AgentController>(agent).unwrap().attack_cooldown_remaining(),
        1.0
    );

    drop(world);
    let events = read_log(&path);
    assert_eq!(
        state_changes(&events),
        vec![
            (AgentState::Patrol, AgentState::Chase),
            (AgentState::Chase, AgentState::Attack),
        ]
    );

    let landed: Vec<_> = events
        .iter()
        .filter(|e| matches!(e.kind, EventKind::AttackLanded { .. }))
        .collect();
    assert_eq!(landed.len(), 1);
    assert_eq!(landed[0].subject, "agent_001");
    assert_eq!(landed[0].timestamp.tick, 6);

    assert!(events.iter().any(|e| e.subject == "player"
        && e.kind
            == EventKind::GaugeChanged {
                gauge: Gauge::Health,
                value: 80.0,
            }));
}

#[test]
fn test_chase_survives_detection_edge_oscillation() {
    let tuning = single_walker(0.1);
    let (mut world, player) = build_world(&tuning, 42, EventLogger::null());
    let agent = agent_entity(&mut world);
    let mut schedule = build_schedule();

    place_player(&mut world, player, agent, 9.9);
    tick(&mut world, &mut schedule);
    assert_eq!(world.get::<AgentController>(agent).unwrap().state(), AgentState::Chase);

    for i in 0..20 {
        let distance = if i % 2 == 0 { 10.5 } else { 9.9 };
        place_player(&mut world, player, agent, distance);
        tick(&mut world, &mut schedule);
        assert_eq!(world.get::<AgentController>(agent).unwrap().state(), AgentState::Chase);
    }

    place_player(&mut world, player, agent, 14.5);
    tick(&mut world, &mut schedule);
    assert_eq!(world.get::<AgentController>(agent).unwrap().state(), AgentState::Chase);

    place_player(&mut world, player, agent, 15.5);
    tick(&mut world, &mut schedule);
    assert_eq!(world.get::<AgentController>(agent).unwrap().state(), AgentState::Patrol);
    assert_eq!(world.get::<NavAgent>(agent).unwrap().speed(), 3.5);
}

#[test]
fn test_starvation_damage_on_emptying_tick() {
    let tuning = no_agents(1.0);
    let (mut world, player) = build_world(&tuning, 1, EventLogger::null());
    *world.get_mut::<Vitals>(player).unwrap() =
        Vitals::new(tuning.vitals.clone()).with_level(Gauge::Hunger, 0.5);
    let mut schedule = build_schedule();

    tick(&mut world, &mut schedule);

    let vitals = world.get::<Vitals>(player).unwrap();
    assert_eq!(vitals.level(Gauge::Hunger), 0.0);
    assert_eq!(vitals.level(Gauge::Health), 99.0);
}

#[test]
fn test_infection_wears_health_down() {
    let tuning = no_agents(1.0);
    let (mut world, player) = build_world(&tuning, 1, EventLogger::null());
    *world.get_mut::<Vitals>(player).unwrap() =
        Vitals::new(tuning.vitals.clone()).with_level(Gauge::Infection, 10.0);
    let mut schedule = build_schedule();

    for _ in 0..5 {
        tick(&mut world, &mut schedule);
    }

    let vitals = world.get::<Vitals>(player).unwrap();
    assert_eq!(vitals.level(Gauge::Health), 90.0);
    assert_eq!(vitals.level(Gauge::Infection), 10.0);
}

#[test]
fn test_death_logged_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");

    let tuning = no_agents(1.0);
    let (mut world, player) = build_world(&tuning, 1, EventLogger::new(&path).unwrap());
    *world.get_mut::<Vitals>(player).unwrap() = Vitals::new(tuning.vitals.clone())
        .with_level(Gauge::Health, 5.0)
        .with_level(Gauge::Infection, 50.0);
    let mut schedule = build_schedule();

    for _ in 0..10 {
        tick(&mut world, &mut schedule);
    }
    assert!(world.get::<Vitals>(player).unwrap().is_dead());

    drop(world);
    let deaths: Vec<_> = read_log(&path).into_iter().filter(Event::is_death).collect();
    assert_eq!(deaths.len(), 1);
    assert_eq!(deaths[0].subject, "player");
    assert_eq!(deaths[0].timestamp.tick, 3);
}
