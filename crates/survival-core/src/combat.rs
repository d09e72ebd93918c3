//! Player Combat
//!
//! Melee and ranged attacks gated by a recovery timer and paid for in
//! stamina. A refused attack has no side effects.

use bevy_ecs::prelude::*;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::capabilities::DamageVolume;
use crate::config::{AttackProfile, CombatConfig};
use crate::vitals::Vitals;

/// Attack mode of a weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    Melee,
    Ranged,
}

/// A held weapon
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub name: String,
    pub kind: WeaponKind,
}

impl Weapon {
    pub fn new(name: impl Into<String>, kind: WeaponKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A projectile to be spawned by whoever owns physics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileLaunch {
    pub origin: Vec3,
    pub velocity: Vec3,
    /// Seconds before the projectile despawns
    pub lifetime: f32,
    pub damage: f32,
}

impl ProjectileLaunch {
    /// Ballistic-free position after `elapsed` seconds, or `None` once expired.
    pub fn position_at(&self, elapsed: f32) -> Option<Vec3> {
        (elapsed >= 0.0 && elapsed <= self.lifetime).then(|| self.origin + self.velocity * elapsed)
    }
}

/// Why an attack did not happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackRefusal {
    /// The previous attack is still recovering
    Recovering,
    /// No weapon equipped
    Unarmed,
    /// Not enough stamina for the attack's cost
    Exhausted,
}

/// Result of an attack request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackOutcome {
    Refused(AttackRefusal),
    /// Melee swing; `hits` damageables were struck
    Melee { hits: usize },
    Ranged(ProjectileLaunch),
}

impl AttackOutcome {
    pub fn performed(&self) -> bool {
        !matches!(self, AttackOutcome::Refused(_))
    }
}

/// Component: The player's weapon and attack timing
#[derive(Component, Debug, Clone)]
pub struct PlayerCombat {
    config: CombatConfig,
    weapon: Option<Weapon>,
    recovery_remaining: f32,
}

impl PlayerCombat {
    pub fn new(config: CombatConfig) -> Self {
        Self {
            config,
            weapon: None,
            recovery_remaining: 0.0,
        }
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    /// Replaces the held weapon, returning the previous one
    pub fn equip(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapon.replace(weapon)
    }

    pub fn unequip(&mut self) -> Option<Weapon> {
        self.weapon.take()
    }

    pub fn is_recovering(&self) -> bool {
        self.recovery_remaining > 0.0
    }

    pub fn recovery_remaining(&self) -> f32 {
        self.recovery_remaining
    }

    /// Counts down the recovery after an attack
    pub fn tick(&mut self, dt: f32) {
        self.recovery_remaining = (self.recovery_remaining - dt.max(0.0)).max(0.0);
    }

    /// Attacks along `forward` from `origin` with the equipped weapon.
    pub fn attack(
        &mut self,
        origin: Vec3,
        forward: Vec3,
        vitals: &mut Vitals,
        volume: &mut dyn DamageVolume,
    ) -> AttackOutcome {
        if self.is_recovering() {
            return self.refuse(AttackRefusal::Recovering);
        }
        let Some(kind) = self.weapon.as_ref().map(|w| w.kind) else {
            return self.refuse(AttackRefusal::Unarmed);
        };

        let profile = self.profile(kind).clone();
        if !vitals.use_stamina(profile.stamina_cost) {
            return self.refuse(AttackRefusal::Exhausted);
        }
        self.recovery_remaining = profile.interval;

        let forward = forward.normalize_or_zero();
        match kind {
            WeaponKind::Melee => {
                let center = origin + forward * self.config.attack_range;
                let hits = volume.damage_in_sphere(center, self.config.hit_radius, profile.damage);
                tracing::debug!(hits, "melee attack");
                AttackOutcome::Melee { hits }
            }
            WeaponKind::Ranged => AttackOutcome::Ranged(ProjectileLaunch {
                origin,
                velocity: forward * self.config.projectile_speed,
                lifetime: self.config.projectile_lifetime,
                damage: profile.damage,
            }),
        }
    }

    fn profile(&self, kind: WeaponKind) -> &AttackProfile {
        match kind {
            WeaponKind::Melee => &self.config.melee,
            WeaponKind::Ranged => &self.config.ranged,
        }
    }

    fn refuse(&self, reason: AttackRefusal) -> AttackOutcome {
        tracing::debug!(?reason, "attack refused");
        AttackOutcome::Refused(reason)
    }
}
