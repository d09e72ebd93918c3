//! Capabilities
//!
//! External interfaces the AI and vitals cores call but do not implement:
//! navigation, damage targets, presentation sinks, and physics overlap
//! queries. All calls are synchronous.

use glam::Vec3;

/// Path following and walkable-point sampling for one agent.
pub trait Navigation {
    /// Finds a walkable point within `radius` of `center`, if any.
    fn sample_walkable_point(&self, center: Vec3, radius: f32) -> Option<Vec3>;

    /// Commands the agent to move toward `point`.
    fn set_destination(&mut self, point: Vec3);

    /// Distance left along the current path; zero when no path is active.
    fn remaining_distance(&self) -> f32;

    /// Current movement velocity.
    fn velocity(&self) -> Vec3;

    /// Sets the travel speed used for subsequent movement.
    fn set_speed(&mut self, speed: f32);
}

/// Anything that can be hurt.
pub trait Damageable {
    fn take_damage(&mut self, amount: f32);
}

/// Write-only sink for animation signals.
pub trait Presentation {
    fn set_speed(&mut self, speed: f32);
    fn set_attacking(&mut self, attacking: bool);
}

/// Physics overlap query that damages whatever it finds.
pub trait DamageVolume {
    /// Applies `amount` to every damageable overlapping the sphere and
    /// returns how many were hit.
    fn damage_in_sphere(&mut self, center: Vec3, radius: f32, amount: f32) -> usize;
}

/// Presentation sink that drops every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPresentation;

impl Presentation for NoPresentation {
    fn set_speed(&mut self, _speed: f32) {}
    fn set_attacking(&mut self, _attacking: bool) {}
}
