use bevy_ecs::prelude::Component;

use crate::physics::BodyId;

/// Link from an ECS entity to its body in the physics world.
///
/// The physics world owns the body; this component is only the forward half
/// of the association (the body's `entity` field is the reverse half).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysicsBodyRef(pub BodyId);
