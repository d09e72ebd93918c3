//! Steering System
//!
//! Moves navigating agents along their paths and keeps poses in sync.

use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};
use survival_events::AgentState;

use crate::ai::AgentController;
use crate::capabilities::Navigation;
use crate::components::{NavAgent, Pose, SimClock};

/// System: Step every navigator and copy the result onto its pose
///
/// Moving agents face their direction of travel, except while attacking,
/// when the controller owns the heading.
pub fn steer_nav_agents(
    clock: Res<SimClock>,
    mut agents: Query<(&mut NavAgent, &mut Pose, Option<&AgentController>)>,
) {
    for (mut nav, mut pose, controller) in agents.iter_mut() {
        pose.position = nav.step(clock.dt);

        let attacking = controller.is_some_and(|c| c.state() == AgentState::Attack);
        let velocity = nav.velocity();
        let heading = Vec3::new(velocity.x, 0.0, velocity.z);
        if !attacking && heading.length_squared() > f32::EPSILON {
            pose.rotation = Quat::from_rotation_y(heading.x.atan2(heading.z));
        }
    }
}
