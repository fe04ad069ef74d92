//! Resource wrappers around the level's physics data.
//!
//! The physics world handle is explicit, owned by the level context through
//! the ECS world, and passed to the systems that need it. There is no
//! process-wide singleton.

use bevy_ecs::prelude::Resource;

use crate::physics::PhysicsWorld;
use crate::rects::SolidRect;

/// The level's physics world. Absent when the level has no collision layer.
#[derive(Resource)]
pub struct PhysicsWorldRes(pub PhysicsWorld);

/// The solid rectangles the world builder consumed, retained for the
/// lifetime of the level so debug rendering can outline them.
#[derive(Resource, Debug, Clone, Default)]
pub struct CollisionRects(pub Vec<SolidRect>);
