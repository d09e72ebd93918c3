//! Configuration System
//!
//! Loads tuning parameters from tuning.toml for easy adjustment without recompiling.
//! Every section falls back to the shipped defaults, so partial files are valid.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use survival_events::{AgentKind, Gauge};
use thiserror::Error;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub simulation: SimulationConfig,
    pub vitals: VitalsConfig,
    pub agent: AgentConfig,
    pub combat: CombatConfig,
    pub locomotion: LocomotionConfig,
    pub inventory: InventoryConfig,
    #[serde(rename = "spawn")]
    pub spawns: Vec<SpawnConfig>,
}

/// Headless run parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub ticks: u64,
    /// Seconds per tick
    pub dt: f32,
    pub seed: u64,
    /// Walkable ground extends this far from the origin
    pub arena_radius: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ticks: 1200,
            dt: 0.05,
            seed: 42,
            arena_radius: 40.0,
        }
    }
}

/// Survival gauge limits and rates (rates are per second)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalsConfig {
    pub max_health: f32,
    pub health_regen_rate: f32,
    pub health_regen_delay: f32,
    pub max_stamina: f32,
    pub stamina_regen_rate: f32,
    pub stamina_regen_delay: f32,
    pub max_hunger: f32,
    pub hunger_decay_rate: f32,
    pub hunger_damage_rate: f32,
    pub max_thirst: f32,
    pub thirst_decay_rate: f32,
    pub thirst_damage_rate: f32,
    pub max_infection: f32,
    pub infection_damage_rate: f32,
}

impl VitalsConfig {
    /// Upper bound of a gauge.
    pub fn max(&self, gauge: Gauge) -> f32 {
        match gauge {
            Gauge::Health => self.max_health,
            Gauge::Stamina => self.max_stamina,
            Gauge::Hunger => self.max_hunger,
            Gauge::Thirst => self.max_thirst,
            Gauge::Infection => self.max_infection,
        }
    }
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            health_regen_rate: 0.0,
            health_regen_delay: 5.0,
            max_stamina: 100.0,
            stamina_regen_rate: 10.0,
            stamina_regen_delay: 1.0,
            max_hunger: 100.0,
            hunger_decay_rate: 1.0,
            hunger_damage_rate: 1.0,
            max_thirst: 100.0,
            thirst_decay_rate: 1.5,
            thirst_damage_rate: 1.5,
            max_infection: 100.0,
            infection_damage_rate: 2.0,
        }
    }
}

/// Enemy behavior tuning shared by every agent kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub detection_range: f32,
    pub attack_range: f32,
    pub patrol_radius: f32,
    pub wait_time: f32,
    pub attack_damage: f32,
    /// Seconds between strikes
    pub attack_cooldown: f32,
    pub move_speed: f32,
    /// Speed while chasing or attacking; also the runner's base speed
    pub run_speed: f32,
    /// Remaining path distance that counts as arrived
    pub stopping_distance: f32,
    /// Interpolation coefficient for turning toward the target, per second
    pub turn_rate: f32,
    pub tank_speed_factor: f32,
    /// Multiple of detection range beyond which a chase is abandoned
    pub give_up_factor: f32,
}

impl AgentConfig {
    /// Travel speed outside of a chase.
    pub fn base_speed(&self, kind: AgentKind) -> f32 {
        match kind {
            AgentKind::Walker => self.move_speed,
            AgentKind::Runner => self.run_speed,
            AgentKind::Tank => self.move_speed * self.tank_speed_factor,
        }
    }

    /// Distance past which a chasing agent falls back to patrol.
    pub fn give_up_range(&self) -> f32 {
        self.detection_range * self.give_up_factor
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            detection_range: 10.0,
            attack_range: 2.0,
            patrol_radius: 10.0,
            wait_time: 2.0,
            attack_damage: 20.0,
            attack_cooldown: 1.0,
            move_speed: 3.5,
            run_speed: 5.0,
            stopping_distance: 0.5,
            turn_rate: 10.0,
            tank_speed_factor: 0.8,
            give_up_factor: 1.5,
        }
    }
}

/// Cost and effect of one attack mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackProfile {
    /// Seconds before the next attack may start
    pub interval: f32,
    pub damage: f32,
    pub stamina_cost: f32,
}

/// Player attack tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Distance in front of the player where melee hits land
    pub attack_range: f32,
    pub hit_radius: f32,
    pub projectile_speed: f32,
    pub projectile_lifetime: f32,
    pub melee: AttackProfile,
    pub ranged: AttackProfile,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            attack_range: 2.0,
            hit_radius: 1.0,
            projectile_speed: 20.0,
            projectile_lifetime: 3.0,
            melee: AttackProfile {
                interval: 1.0,
                damage: 20.0,
                stamina_cost: 10.0,
            },
            ranged: AttackProfile {
                interval: 0.5,
                damage: 30.0,
                stamina_cost: 15.0,
            },
        }
    }
}

/// Player movement tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub crouch_speed: f32,
    pub jump_velocity: f32,
    /// Stamina spent per second of sprinting
    pub sprint_drain_rate: f32,
    pub turn_rate: f32,
    pub gravity: f32,
    /// Vertical velocity held while standing on the ground
    pub grounded_velocity: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            sprint_speed: 8.0,
            crouch_speed: 3.0,
            jump_velocity: 5.0,
            sprint_drain_rate: 20.0,
            turn_rate: 10.0,
            gravity: -9.81,
            grounded_velocity: -2.0,
        }
    }
}

/// Inventory capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub max_slots: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self { max_slots: 20 }
    }
}

/// One agent placed at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    #[serde(default)]
    pub kind: AgentKind,
    pub position: Vec3,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            vitals: VitalsConfig::default(),
            agent: AgentConfig::default(),
            combat: CombatConfig::default(),
            locomotion: LocomotionConfig::default(),
            inventory: InventoryConfig::default(),
            spawns: vec![
                SpawnConfig {
                    kind: AgentKind::Walker,
                    position: Vec3::new(12.0, 0.0, 0.0),
                },
                SpawnConfig {
                    kind: AgentKind::Runner,
                    position: Vec3::new(0.0, 0.0, -18.0),
                },
                SpawnConfig {
                    kind: AgentKind::Tank,
                    position: Vec3::new(-8.0, 0.0, 8.0),
                },
            ],
        }
    }
}

impl Tuning {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let tuning: Self = toml::from_str(content)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load configuration from `path`, or use defaults if it cannot be read.
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(ConfigError::Io(e)) => {
                tracing::warn!("Could not read {}: {}. Using defaults.", path.display(), e);
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Reject values that would break gauge bounds or tick arithmetic
    pub fn validate(&self) -> Result<(), ConfigError> {
        for gauge in Gauge::ALL {
            if self.vitals.max(gauge) <= 0.0 {
                return Err(ConfigError::Invalid(format!("max {} must be positive", gauge)));
            }
        }
        if self.simulation.dt < 0.0 {
            return Err(ConfigError::Invalid("simulation.dt must not be negative".into()));
        }
        if self.simulation.arena_radius <= 0.0 {
            return Err(ConfigError::Invalid("simulation.arena_radius must be positive".into()));
        }
        if self.agent.give_up_factor < 1.0 {
            return Err(ConfigError::Invalid("agent.give_up_factor must be at least 1".into()));
        }
        if self.agent.attack_range > self.agent.detection_range {
            return Err(ConfigError::Invalid(
                "agent.attack_range must not exceed agent.detection_range".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid tuning: {0}")]
    Invalid(String),
}
