//! Player Locomotion
//!
//! Camera-relative walking, sprinting and crouching with a simple vertical
//! velocity for jumps and falls. Ground contact is reported by the caller.

use bevy_ecs::prelude::*;
use glam::{Quat, Vec2, Vec3};

use crate::components::Pose;
use crate::config::LocomotionConfig;
use crate::vitals::Vitals;

/// Player intent for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveInput {
    /// Strafe (x) and forward (y) axes in [-1, 1]
    pub axis: Vec2,
    pub sprint: bool,
    pub crouch: bool,
    pub jump: bool,
}

/// What one locomotion update did
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionStep {
    pub displacement: Vec3,
    /// Horizontal speed for the animation layer
    pub speed: f32,
    pub sprinting: bool,
    pub crouching: bool,
}

/// Component: Movement state of the player
#[derive(Component, Debug, Clone)]
pub struct Locomotion {
    config: LocomotionConfig,
    vertical_velocity: f32,
    move_direction: Vec3,
    sprinting: bool,
    sprint_held: bool,
    crouching: bool,
}

impl Locomotion {
    pub fn new(config: LocomotionConfig) -> Self {
        Self {
            config,
            vertical_velocity: 0.0,
            move_direction: Vec3::ZERO,
            sprinting: false,
            sprint_held: false,
            crouching: false,
        }
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    pub fn is_crouching(&self) -> bool {
        self.crouching
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    pub fn move_direction(&self) -> Vec3 {
        self.move_direction
    }

    /// Current travel speed. Crouching overrides sprinting.
    pub fn current_speed(&self) -> f32 {
        if self.crouching {
            self.config.crouch_speed
        } else if self.sprinting {
            self.config.sprint_speed
        } else {
            self.config.walk_speed
        }
    }

    /// Runs one tick: reads `input`, moves and turns `pose`, and pays for
    /// sprinting out of `vitals`.
    pub fn update(
        &mut self,
        input: &MoveInput,
        camera_forward: Vec3,
        grounded: bool,
        pose: &mut Pose,
        vitals: &mut Vitals,
        dt: f32,
    ) -> LocomotionStep {
        if grounded && self.vertical_velocity < 0.0 {
            self.vertical_velocity = self.config.grounded_velocity;
        }

        // A sprint ended by exhaustion resumes only on a fresh press
        if input.sprint && !self.sprint_held {
            self.sprinting = true;
        } else if !input.sprint {
            self.sprinting = false;
        }
        self.sprint_held = input.sprint;
        self.crouching = input.crouch;

        if input.jump && grounded {
            self.vertical_velocity = self.config.jump_velocity;
        } else if !grounded {
            self.vertical_velocity += self.config.gravity * dt;
        }

        self.move_direction = camera_relative(camera_forward, input.axis);
        let speed = self.current_speed();
        let displacement =
            (self.move_direction * speed + Vec3::Y * self.vertical_velocity) * dt;
        pose.position += displacement;

        if self.move_direction != Vec3::ZERO {
            let d = self.move_direction;
            let look = Quat::from_rotation_y(d.x.atan2(d.z));
            let t = (self.config.turn_rate * dt).clamp(0.0, 1.0);
            pose.rotation = pose.rotation.lerp(look, t);
        }

        let step = LocomotionStep {
            displacement,
            speed: self.move_direction.length() * speed,
            sprinting: self.sprinting,
            crouching: self.crouching,
        };

        if self.sprinting
            && self.move_direction.length() > 0.1
            && !vitals.use_stamina(self.config.sprint_drain_rate * dt)
        {
            tracing::debug!("sprint ended, out of stamina");
            self.sprinting = false;
        }

        step
    }
}

/// Movement direction on the ground plane for a camera looking along
/// `camera_forward`.
fn camera_relative(camera_forward: Vec3, axis: Vec2) -> Vec3 {
    let forward = Vec3::new(camera_forward.x, 0.0, camera_forward.z).normalize_or_zero();
    let right = Vec3::Y.cross(forward);
    (forward * axis.y + right * axis.x).normalize_or_zero()
}
