//! Physics stepping and contact resolution systems.
//!
//! [`step_physics`] runs the single per-frame physics step, during which
//! [`ContactState`] receives the begin/end callbacks. [`resolve_contacts`]
//! then drains that state and emits the game-facing messages. The two must
//! run in that order, within the same frame; see
//! [`build_schedule`](crate::game::build_schedule).

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::collisionmasks::CollisionMasks;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::contacts::{
    Axis, BufferedContact, ContactMode, ContactPhase, ContactState, build_movement_trace,
};
use crate::events::collision::{CheckEvent, CollideEvent, MovementTraceEvent};
use crate::resources::collisionmap::CollisionMap;
use crate::resources::physicsworld::PhysicsWorldRes;
use crate::resources::worldtime::WorldTime;

/// Advance the physics world exactly once for this frame.
///
/// Contact callbacks execute synchronously inside this system and nowhere
/// else. A level without a collision layer has no physics world and the
/// system is a no-op.
pub fn step_physics(
    world: Option<ResMut<PhysicsWorldRes>>,
    mut contacts: ResMut<ContactState>,
    time: Res<WorldTime>,
) {
    if let Some(mut world) = world {
        world.0.step(time.delta, contacts.as_mut());
    }
}

/// Drain the frame's contact state into check/collide/trace messages.
pub fn resolve_contacts(
    mut state: ResMut<ContactState>,
    world: Option<Res<PhysicsWorldRes>>,
    map: Option<Res<CollisionMap>>,
    masks: Query<&CollisionMasks>,
    movers: Query<(&MapPosition, &RigidBody, &BoxCollider)>,
    mut checks: MessageWriter<CheckEvent>,
    mut collides: MessageWriter<CollideEvent>,
    mut traces: MessageWriter<MovementTraceEvent>,
) {
    let scale = world.as_ref().map(|w| w.0.scale);
    match state.mode() {
        ContactMode::Immediate => {
            // Checks re-fire every frame the pair stays in contact; the
            // queue is not consumed here, only read.
            for (entity, records) in state.check_entries() {
                for record in records {
                    if record.contact_count > 0 {
                        checks.write(CheckEvent {
                            entity,
                            other: record.other,
                        });
                    }
                }
            }

            // Collide and trace records are consumed once per frame.
            for (entity, records) in state.drain_collides() {
                for record in records {
                    collides.write(CollideEvent {
                        entity,
                        other: record.other,
                        axis: record.axis,
                    });
                }
            }
            for (entity, records) in state.drain_traces() {
                for record in records {
                    emit_trace(
                        entity,
                        record.normal,
                        scale,
                        &movers,
                        map.as_deref(),
                        &mut traces,
                    );
                }
            }
        }
        ContactMode::Buffered => {
            // Strict emission order: later records may reference pairs
            // already resolved earlier this same frame.
            for record in state.drain_buffer() {
                resolve_buffered(
                    &record,
                    scale,
                    &masks,
                    &movers,
                    map.as_deref(),
                    &mut checks,
                    &mut collides,
                    &mut traces,
                );
            }
        }
    }
}

fn resolve_buffered(
    record: &BufferedContact,
    scale: Option<f32>,
    masks: &Query<&CollisionMasks>,
    movers: &Query<(&MapPosition, &RigidBody, &BoxCollider)>,
    map: Option<&CollisionMap>,
    checks: &mut MessageWriter<CheckEvent>,
    collides: &mut MessageWriter<CollideEvent>,
    traces: &mut MessageWriter<MovementTraceEvent>,
) {
    // End transitions carry no policy of their own; the engine re-reports
    // persistent contacts each step, so begins alone drive notifications.
    if record.phase != ContactPhase::Begin {
        return;
    }
    match (record.entity_a, record.entity_b) {
        (Some(a), Some(b)) => {
            // Masks are read live from the components, unlike the immediate
            // strategy's snapshot taken at body creation.
            let (Ok(masks_a), Ok(masks_b)) = (masks.get(a), masks.get(b)) else {
                return;
            };
            let check_a = masks_a.wants_check(masks_b.kind);
            let check_b = masks_b.wants_check(masks_a.kind);
            if check_a {
                checks.write(CheckEvent { entity: a, other: b });
            }
            if check_b {
                checks.write(CheckEvent { entity: b, other: a });
            }
            // Check interest on either side makes the pair a trigger
            // overlap; only mask-indifferent pairs collide physically.
            if !check_a && !check_b {
                let axis = Axis::from_normal(record.normal);
                collides.write(CollideEvent {
                    entity: a,
                    other: b,
                    axis,
                });
                collides.write(CollideEvent {
                    entity: b,
                    other: a,
                    axis,
                });
            }
        }
        (Some(entity), None) | (None, Some(entity)) => {
            emit_trace(entity, record.normal, scale, movers, map, traces);
        }
        (None, None) => {}
    }
}

fn emit_trace(
    entity: Entity,
    normal: Vec2,
    scale: Option<f32>,
    movers: &Query<(&MapPosition, &RigidBody, &BoxCollider)>,
    map: Option<&CollisionMap>,
    traces: &mut MessageWriter<MovementTraceEvent>,
) {
    // A terrain contact implies a physics world, so scale is present; the
    // entity may have despawned since the callback, in which case there is
    // nobody left to notify.
    let Some(scale) = scale else { return };
    let Ok((position, body, collider)) = movers.get(entity) else {
        return;
    };
    let trace = build_movement_trace(
        normal,
        position.pos,
        body.velocity,
        collider.size,
        scale,
        |pos| map.and_then(|m| m.get_tile(pos)),
    );
    traces.write(MovementTraceEvent { entity, trace });
}
