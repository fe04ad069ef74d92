//! Kinematic body component.
//!
//! The bridge only reads velocity (to decide which way a terrain contact
//! snaps the traced position); integrating motion and applying per-entity
//! gravity stay with the host's own systems.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Velocity of an entity in world units per second.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody {
    pub velocity: Vec2,
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(velocity: Vec2) -> Self {
        Self { velocity }
    }
}
