use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Camera scroll offset in world pixels.
///
/// The debug-outline system subtracts this from world positions to produce
/// screen-space geometry. Mutated by whatever camera controller the host
/// runs.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct Camera {
    pub scroll: Vec2,
}
