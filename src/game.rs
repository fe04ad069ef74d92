//! Level loading and frame orchestration.
//!
//! [`load_level`] turns a level's collision layer into the physics world and
//! its companion resources; [`build_schedule`] wires the per-frame order:
//! step the physics world, resolve the translated contacts, then refresh the
//! debug outlines. The host drives the schedule once per frame after
//! updating [`WorldTime`](crate::resources::worldtime::WorldTime).

use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::boxcollider::BoxCollider;
use crate::components::collisionmasks::CollisionMasks;
use crate::components::mapposition::MapPosition;
use crate::components::physicsbody::PhysicsBodyRef;
use crate::contacts::{ContactMode, ContactState};
use crate::events::collision::{CheckEvent, CollideEvent, MovementTraceEvent};
use crate::physics::{PhysicsWorld, build_collision_world};
use crate::rects::extract_solid_rects;
use crate::resources::collisionmap::{COLLISION_LAYER, CollisionMap, LevelData, TileGrid};
use crate::resources::physicsworld::{CollisionRects, PhysicsWorldRes};
use crate::resources::worldtime::WorldTime;
use crate::systems::contacts::{resolve_contacts, step_physics};
use crate::systems::debugdraw::{DebugOutlines, debug_collision_outlines};

/// Install the physics side of a level into the ECS world.
///
/// Scans the level's layers for the one named `collision`, decomposes it
/// into solid rectangles, and builds the static physics world from them.
/// The previous level's physics resources are dropped wholesale first; a
/// level without a collision layer leaves the physics world unset, which
/// downstream systems treat as "no physics", not as an error.
pub fn load_level(world: &mut World, level: &LevelData, mode: ContactMode, scale: f32) {
    world.init_resource::<WorldTime>();
    world.init_resource::<Messages<CheckEvent>>();
    world.init_resource::<Messages<CollideEvent>>();
    world.init_resource::<Messages<MovementTraceEvent>>();
    world.init_resource::<DebugOutlines>();
    world.insert_resource(ContactState::new(mode));

    world.remove_resource::<PhysicsWorldRes>();
    world.remove_resource::<CollisionMap>();
    world.remove_resource::<CollisionRects>();

    let Some(layer) = level.collision_layer() else {
        warn!("level has no '{COLLISION_LAYER}' layer; physics world left unset");
        return;
    };

    let grid = TileGrid::from_layer(layer);
    let rects = extract_solid_rects(&grid);
    info!(
        "collision layer {}x{}: {} solid rects",
        grid.width,
        grid.height,
        rects.len()
    );
    let physics = build_collision_world(&rects, layer.tilesize, scale);

    world.insert_resource(CollisionMap::new(grid, layer.tilesize));
    world.insert_resource(CollisionRects(rects));
    world.insert_resource(PhysicsWorldRes(physics));
}

/// Create a physics body for a spawned entity and return the component that
/// links the entity to it.
///
/// The body is centered on the entity's box and carries the entity id and a
/// snapshot of its masks as its back-reference, so contact callbacks can
/// identify and gate the pair without touching the ECS world.
pub fn attach_entity_body(
    physics: &mut PhysicsWorld,
    entity: Entity,
    masks: CollisionMasks,
    position: &MapPosition,
    collider: &BoxCollider,
) -> PhysicsBodyRef {
    let center = (position.pos + collider.half_extents()) * physics.scale;
    let half_extents = collider.half_extents() * physics.scale;
    PhysicsBodyRef(physics.create_entity_body(entity, masks, center, half_extents))
}

/// Per-frame schedule: physics step, then contact resolution, then debug
/// outlines. The rest of the host's update runs in its own schedules around
/// this one.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((step_physics, resolve_contacts, debug_collision_outlines).chain());
    schedule
}
