//! Debug toggle resource.
//!
//! The presence of this resource enables debug output such as the collision
//! rectangle outlines. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, debug systems do their work.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
