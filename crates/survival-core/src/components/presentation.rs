//! Animator Signals
//!
//! Last values an agent published for its animation layer.

use bevy_ecs::prelude::*;

use crate::capabilities::Presentation;

/// Component: Animation parameters written by the agent controller
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimatorSignals {
    pub speed: f32,
    pub attacking: bool,
}

impl Presentation for AnimatorSignals {
    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn set_attacking(&mut self, attacking: bool) {
        self.attacking = attacking;
    }
}
