//! Agent Evaluation System
//!
//! Runs every agent's controller against its assigned target and records
//! state changes and landed attacks.

use bevy_ecs::prelude::*;
use survival_events::EventKind;

use crate::ai::{AgentController, TargetView};
use crate::components::{AgentTarget, AnimatorSignals, Label, NavAgent, Player, Pose, SimClock};
use crate::events::PendingEvents;
use crate::vitals::Vitals;
use crate::SimRng;

/// System: Evaluate every agent controller once
#[allow(clippy::type_complexity)]
pub fn evaluate_agents(
    clock: Res<SimClock>,
    mut rng: ResMut<SimRng>,
    mut pending: ResMut<PendingEvents>,
    mut agents: Query<
        (
            &Label,
            &AgentTarget,
            &mut AgentController,
            &mut Pose,
            &mut NavAgent,
            &mut AnimatorSignals,
        ),
        Without<Player>,
    >,
    mut targets: Query<(&Label, &Pose, &mut Vitals), With<Player>>,
) {
    let now = clock.now;
    let dt = clock.dt;

    for (label, target, mut controller, mut pose, mut nav, mut signals) in agents.iter_mut() {
        let mut target_label = None;
        let view = match target.0.and_then(|entity| targets.get_mut(entity).ok()) {
            Some((name, target_pose, vitals)) => {
                target_label = Some(name.0.clone());
                Some(TargetView {
                    position: target_pose.position,
                    damageable: vitals.into_inner(),
                })
            }
            None => None,
        };

        let tick = controller.evaluate(
            &mut *pose,
            view,
            &mut *nav,
            &mut *signals,
            &mut rng.0,
            dt,
        );

        if let Some((from, to)) = tick.transition {
            pending.record(now, &label.0, EventKind::StateChanged { from, to });
        }
        if let (Some(damage), Some(target)) = (tick.damage_dealt, target_label) {
            pending.record(now, &label.0, EventKind::AttackLanded { target, damage });
        }
    }
}
