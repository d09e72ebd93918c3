//! Agent Types
//!
//! Enemy archetypes and the behavior modes of the agent state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enemy archetype; fixes base movement speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    #[default]
    Walker,
    Runner,
    Tank,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::Walker => write!(f, "walker"),
            AgentKind::Runner => write!(f, "runner"),
            AgentKind::Tank => write!(f, "tank"),
        }
    }
}

/// Current behavior mode of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentState {
    /// Wander around the home position
    #[default]
    Patrol,
    /// Follow the target
    Chase,
    /// Face the target and strike on cooldown
    Attack,
    /// Stand still until the wait timer runs out
    Wait,
}

impl AgentState {
    /// Returns true while the agent runs at its chase speed.
    pub fn is_engaged(self) -> bool {
        matches!(self, AgentState::Chase | AgentState::Attack)
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentState::Patrol => write!(f, "patrol"),
            AgentState::Chase => write!(f, "chase"),
            AgentState::Attack => write!(f, "attack"),
            AgentState::Wait => write!(f, "wait"),
        }
    }
}
