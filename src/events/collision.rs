//! Collision notification messages.
//!
//! Three distinct semantics come out of one physics contact stream:
//!
//! - [`CheckEvent`] – non-physical trigger overlap. Fires every frame the
//!   contact persists, gated by the entity's `check_against` mask.
//! - [`CollideEvent`] – physical response with a resolved axis of
//!   penetration. Fires once per begin-contact record.
//! - [`MovementTraceEvent`] – terrain contact, carrying the synthetic trace
//!   the host hands to its movement-trace handler. The only path that
//!   reports tile identity back to an entity.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

use crate::contacts::{Axis, MovementTrace};

/// `entity` overlapped `other` and its mask asked to be told about it.
#[derive(Message, Debug, Clone, Copy)]
pub struct CheckEvent {
    pub entity: Entity,
    pub other: Entity,
}

/// `entity` physically collided with `other` along `axis`.
#[derive(Message, Debug, Clone, Copy)]
pub struct CollideEvent {
    pub entity: Entity,
    pub other: Entity,
    pub axis: Axis,
}

/// `entity` ran into terrain; `trace` describes how.
#[derive(Message, Debug, Clone, Copy)]
pub struct MovementTraceEvent {
    pub entity: Entity,
    pub trace: MovementTrace,
}
