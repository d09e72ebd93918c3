//! World Components
//!
//! Placement, identity and targeting components plus the simulation clock.

use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};
use survival_events::SimTime;

/// Component: World-space placement
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    /// Pose at `position` facing +Z.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Unit facing direction.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

/// Component: Marks the player entity
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Component: Event subject name (e.g., "player", "agent_001")
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Label(pub String);

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Label for the n-th spawned agent
    pub fn agent(index: usize) -> Self {
        Self(format!("agent_{:03}", index))
    }
}

/// Component: The entity an agent hunts, assigned at spawn
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentTarget(pub Option<Entity>);

/// Resource: Simulation time and fixed step
#[derive(Resource, Debug, Clone, Copy)]
pub struct SimClock {
    pub now: SimTime,
    /// Seconds per tick
    pub dt: f32,
}

impl SimClock {
    pub fn new(dt: f32) -> Self {
        Self {
            now: SimTime::start(),
            dt,
        }
    }

    /// Moves the clock forward one tick
    pub fn advance(&mut self) {
        self.now.advance(self.dt);
    }
}
