//! Agent Behavior Controller
//!
//! Evaluated once per tick against an explicitly assigned target:
//!
//! | State  | Action                                   | Leaves for                     |
//! |--------|------------------------------------------|--------------------------------|
//! | Patrol | pick a new point near home when arrived  | Chase within detection range   |
//! | Chase  | head for the target                      | Attack in range, Patrol beyond the give-up range |
//! | Attack | turn toward the target, strike on cooldown | Chase once out of range      |
//! | Wait   | count down                               | Patrol when the timer runs out |
//!
//! Detection uses a hysteresis band: the agent starts chasing at the
//! detection range but only gives up past `give_up_factor` times that range.

use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};
use rand::Rng;
use survival_events::{AgentKind, AgentState};

use crate::capabilities::{Damageable, Navigation, Presentation};
use crate::components::Pose;
use crate::config::AgentConfig;

use super::patrol::random_in_unit_sphere;

/// The target as seen by one evaluation.
pub struct TargetView<'a> {
    pub position: Vec3,
    pub damageable: &'a mut dyn Damageable,
}

/// Report of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AgentTick {
    /// State change made this tick, as (from, to)
    pub transition: Option<(AgentState, AgentState)>,
    /// Damage handed to the target this tick
    pub damage_dealt: Option<f32>,
}

/// State machine for one enemy.
#[derive(Component, Debug, Clone)]
pub struct AgentController {
    kind: AgentKind,
    config: AgentConfig,
    home_position: Vec3,
    state: AgentState,
    attack_cooldown_remaining: f32,
    wait_remaining: f32,
}

impl AgentController {
    /// Creates a patrolling agent whose home is its spawn position.
    pub fn new(kind: AgentKind, config: AgentConfig, home_position: Vec3) -> Self {
        Self {
            kind,
            config,
            home_position,
            state: AgentState::Patrol,
            attack_cooldown_remaining: 0.0,
            wait_remaining: 0.0,
        }
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn home_position(&self) -> Vec3 {
        self.home_position
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn attack_cooldown_remaining(&self) -> f32 {
        self.attack_cooldown_remaining
    }

    pub fn wait_remaining(&self) -> f32 {
        self.wait_remaining
    }

    /// Travel speed outside of a chase.
    pub fn base_speed(&self) -> f32 {
        self.config.base_speed(self.kind)
    }

    /// Travel speed while chasing or attacking.
    pub fn chase_speed(&self) -> f32 {
        self.config.run_speed
    }

    /// Puts the agent in Wait for the configured wait time. Nothing inside
    /// the state machine enters Wait; this is the external trigger.
    pub fn hold(&mut self) -> AgentTick {
        let mut tick = AgentTick::default();
        self.wait_remaining = self.config.wait_time;
        self.enter(AgentState::Wait, &mut tick);
        tick
    }

    /// Runs one tick. Without a target nothing is evaluated and no command
    /// or signal is issued.
    pub fn evaluate<R: Rng + ?Sized>(
        &mut self,
        pose: &mut Pose,
        target: Option<TargetView<'_>>,
        nav: &mut dyn Navigation,
        presentation: &mut dyn Presentation,
        rng: &mut R,
        dt: f32,
    ) -> AgentTick {
        let mut tick = AgentTick::default();
        let Some(target) = target else {
            return tick;
        };

        let distance = pose.position.distance(target.position);

        match self.state {
            AgentState::Patrol => {
                self.patrol(nav, rng);
                if distance <= self.config.detection_range {
                    self.enter(AgentState::Chase, &mut tick);
                    nav.set_speed(self.chase_speed());
                }
            }
            AgentState::Chase => {
                nav.set_destination(target.position);
                if distance <= self.config.attack_range {
                    self.enter(AgentState::Attack, &mut tick);
                    self.attack_cooldown_remaining = self.config.attack_cooldown;
                } else if distance > self.config.give_up_range() {
                    self.enter(AgentState::Patrol, &mut tick);
                    nav.set_speed(self.base_speed());
                }
            }
            AgentState::Attack => {
                self.turn_toward(pose, target.position, dt);
                if self.attack_cooldown_remaining <= 0.0 {
                    target.damageable.take_damage(self.config.attack_damage);
                    tick.damage_dealt = Some(self.config.attack_damage);
                    self.attack_cooldown_remaining = self.config.attack_cooldown;
                } else {
                    self.attack_cooldown_remaining -= dt;
                }

                if distance > self.config.attack_range {
                    self.enter(AgentState::Chase, &mut tick);
                }
            }
            AgentState::Wait => {
                if self.wait_remaining <= 0.0 {
                    self.enter(AgentState::Patrol, &mut tick);
                    nav.set_speed(self.base_speed());
                } else {
                    self.wait_remaining -= dt;
                }
            }
        }

        presentation.set_speed(nav.velocity().length());
        presentation.set_attacking(self.state == AgentState::Attack);

        tick
    }

    /// Picks a fresh patrol point once the current one is reached.
    fn patrol<R: Rng + ?Sized>(&self, nav: &mut dyn Navigation, rng: &mut R) {
        if nav.remaining_distance() > self.config.stopping_distance {
            return;
        }

        let radius = self.config.patrol_radius;
        let candidate = self.home_position + random_in_unit_sphere(rng) * radius;
        match nav.sample_walkable_point(candidate, radius) {
            Some(point) => nav.set_destination(point),
            None => tracing::debug!(?candidate, "no walkable patrol point near candidate"),
        }
    }

    /// Eases the heading toward the target around the vertical axis.
    fn turn_toward(&self, pose: &mut Pose, target: Vec3, dt: f32) {
        let to_target = target - pose.position;
        let flat = Vec3::new(to_target.x, 0.0, to_target.z);
        if flat.length_squared() <= f32::EPSILON {
            return;
        }

        let look = Quat::from_rotation_y(flat.x.atan2(flat.z));
        let t = (self.config.turn_rate * dt).clamp(0.0, 1.0);
        pose.rotation = pose.rotation.lerp(look, t);
    }

    fn enter(&mut self, next: AgentState, tick: &mut AgentTick) {
        let previous = self.state;
        self.state = next;
        tick.transition = Some((previous, next));
        tracing::debug!(kind = %self.kind, from = %previous, to = %next, "agent state changed");
    }
}
