//! Flat-Ground Navigation
//!
//! A straight-line navigator over an open, level disc of walkable ground
//! centered on the origin. There are no obstacles: every point on the disc
//! is reachable and paths are straight segments.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::capabilities::Navigation;

/// Component: Moves an agent toward its destination at its current speed
#[derive(Component, Debug, Clone)]
pub struct NavAgent {
    position: Vec3,
    destination: Option<Vec3>,
    speed: f32,
    velocity: Vec3,
    stopping_distance: f32,
    arena_radius: f32,
}

impl NavAgent {
    pub fn new(position: Vec3, speed: f32, stopping_distance: f32, arena_radius: f32) -> Self {
        Self {
            position,
            destination: None,
            speed,
            velocity: Vec3::ZERO,
            stopping_distance,
            arena_radius,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Advances along the path by `dt` seconds and returns the new position.
    ///
    /// Movement stops once the destination is within the stopping distance.
    pub fn step(&mut self, dt: f32) -> Vec3 {
        self.velocity = Vec3::ZERO;
        let Some(destination) = self.destination else {
            return self.position;
        };

        let offset = destination - self.position;
        let distance = offset.length();
        if distance <= self.stopping_distance || self.speed <= 0.0 {
            return self.position;
        }

        let direction = offset / distance;
        let travel = (self.speed * dt).min(distance);
        self.position += direction * travel;
        self.velocity = direction * self.speed;
        self.position
    }

    fn on_ground(&self, point: Vec3) -> Vec3 {
        Vec3::new(point.x, self.position.y, point.z)
    }
}

impl Navigation for NavAgent {
    fn sample_walkable_point(&self, center: Vec3, radius: f32) -> Option<Vec3> {
        let flat = self.on_ground(center);
        let horizontal = Vec3::new(flat.x, 0.0, flat.z);
        if horizontal.length() <= self.arena_radius {
            return Some(flat);
        }

        // Nearest point on the rim, if the search radius reaches it
        let rim = horizontal.normalize_or_zero() * self.arena_radius;
        let rim = Vec3::new(rim.x, flat.y, rim.z);
        (rim.distance(flat) <= radius).then_some(rim)
    }

    fn set_destination(&mut self, point: Vec3) {
        self.destination = Some(self.on_ground(point));
    }

    fn remaining_distance(&self) -> f32 {
        self.destination
            .map(|destination| self.position.distance(destination))
            .unwrap_or(0.0)
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}
