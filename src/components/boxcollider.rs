use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned box extents for an entity's physics fixture, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// Half extents of the box, used when creating the fixture.
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }
}
