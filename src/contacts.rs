//! Translation of low-level contact callbacks into per-entity contact state.
//!
//! [`ContactState`] is the crate's [`ContactListener`]: it receives the
//! physics engine's begin/end notifications during the step and records just
//! enough for the resolver systems in
//! [`systems::contacts`](crate::systems::contacts) to emit the game-facing
//! check/collide/trace messages once per frame.
//!
//! Two strategies are carried, selected with [`ContactMode`] at world-build
//! time:
//!
//! - **Immediate** keeps live per-entity queues updated directly inside the
//!   callbacks: a check queue of reference-counted pairs, a collide queue of
//!   set-once axis records, and a trace queue holding one record per
//!   touched terrain body.
//! - **Buffered** appends raw `{phase, entities, normal}` records to an
//!   ordered buffer and defers all policy to the per-frame drain, so no
//!   game state is touched from inside the physics engine's callback stack.
//!   Multiple contact points between the same pair within one frame are not
//!   deduplicated and may fire their notifications more than once.

use bevy_ecs::prelude::{Entity, Resource};
use glam::Vec2;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::physics::{BodyId, Contact, ContactListener};

/// Axis of penetration resolved from a manifold normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Classify a manifold normal. Ties (45° contacts) resolve to `X`.
    pub fn from_normal(normal: Vec2) -> Self {
        if normal.y.abs() > normal.x.abs() {
            Axis::Y
        } else {
            Axis::X
        }
    }
}

/// Strategy for turning contact callbacks into game notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactMode {
    /// Update per-entity queues directly inside the callbacks and drain them
    /// once per frame.
    #[default]
    Immediate,
    /// Record raw contact transitions during the step and re-resolve the
    /// whole batch once per frame, in emission order.
    Buffered,
}

/// Reference-counted "check" pairing against one other entity.
#[derive(Debug, Clone, Copy)]
pub struct CheckRecord {
    pub other: Entity,
    /// Live contact count. End-contact decrements without clamping, so a
    /// late or re-masked end can leave this negative; such records simply
    /// never fire.
    pub contact_count: i32,
}

/// Pending physical-collision notification against one other entity.
#[derive(Debug, Clone, Copy)]
pub struct CollideRecord {
    pub other: Entity,
    /// Axis captured at begin-contact. The latest begin before the drain
    /// wins.
    pub axis: Axis,
}

/// Pending terrain contact against one terrain body.
#[derive(Debug, Clone, Copy)]
pub struct TraceRecord {
    pub terrain: BodyId,
    /// Normal captured at begin-contact. The latest begin against the same
    /// terrain body before the drain wins; contacts with distinct terrain
    /// bodies keep separate records.
    pub normal: Vec2,
}

/// Raw contact transition recorded by the buffered strategy.
#[derive(Debug, Clone, Copy)]
pub struct BufferedContact {
    pub phase: ContactPhase,
    pub entity_a: Option<Entity>,
    pub entity_b: Option<Entity>,
    pub normal: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Begin,
    End,
}

type RecordList<T> = SmallVec<[T; 2]>;

/// Contact state shared between the physics step and the resolver systems.
#[derive(Resource, Default)]
pub struct ContactState {
    mode: ContactMode,
    check_queue: FxHashMap<Entity, RecordList<CheckRecord>>,
    collide_queue: FxHashMap<Entity, RecordList<CollideRecord>>,
    trace_queue: FxHashMap<Entity, RecordList<TraceRecord>>,
    buffer: Vec<BufferedContact>,
}

impl ContactState {
    pub fn new(mode: ContactMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> ContactMode {
        self.mode
    }

    /// Snapshot the collide queue for processing and leave it empty.
    /// Collide records are consumed once per frame.
    pub fn drain_collides(&mut self) -> FxHashMap<Entity, RecordList<CollideRecord>> {
        std::mem::take(&mut self.collide_queue)
    }

    /// Snapshot the terrain-trace queue and leave it empty.
    pub fn drain_traces(&mut self) -> FxHashMap<Entity, RecordList<TraceRecord>> {
        std::mem::take(&mut self.trace_queue)
    }

    /// Snapshot the buffered contact records, in emission order, and leave
    /// the buffer empty.
    pub fn drain_buffer(&mut self) -> Vec<BufferedContact> {
        std::mem::take(&mut self.buffer)
    }

    /// Check pairs currently on file for `entity`, in record order. Entries
    /// persist across frames while their contact count stays non-zero.
    pub fn checks_for(&self, entity: Entity) -> &[CheckRecord] {
        match self.check_queue.get(&entity) {
            Some(records) => records.as_slice(),
            None => &[],
        }
    }

    /// Entities that currently hold check records, paired with their record
    /// lists. Iteration order across entities is unspecified; per-entity
    /// record order is stable.
    pub fn check_entries(&self) -> impl Iterator<Item = (Entity, &[CheckRecord])> {
        self.check_queue
            .iter()
            .map(|(entity, records)| (*entity, records.as_slice()))
    }

    fn bump_check(&mut self, entity: Entity, other: Entity, delta: i32) {
        let records = self.check_queue.entry(entity).or_default();
        match records.iter_mut().find(|r| r.other == other) {
            Some(record) => {
                record.contact_count += delta;
                // A pair back at zero is done; negative counts are kept as
                // inert records (see the field's doc).
                if record.contact_count == 0 {
                    records.retain(|r| r.other != other);
                }
            }
            None => records.push(CheckRecord {
                other,
                contact_count: delta,
            }),
        }
        if self.check_queue.get(&entity).is_some_and(|r| r.is_empty()) {
            self.check_queue.remove(&entity);
        }
    }

    fn set_collide(&mut self, entity: Entity, other: Entity, axis: Axis) {
        let records = self.collide_queue.entry(entity).or_default();
        match records.iter_mut().find(|r| r.other == other) {
            Some(record) => record.axis = axis,
            None => records.push(CollideRecord { other, axis }),
        }
    }

    fn set_trace(&mut self, entity: Entity, terrain: BodyId, normal: Vec2) {
        let records = self.trace_queue.entry(entity).or_default();
        match records.iter_mut().find(|r| r.terrain == terrain) {
            Some(record) => record.normal = normal,
            None => records.push(TraceRecord { terrain, normal }),
        }
    }

    fn begin_immediate(&mut self, contact: &Contact) {
        match (contact.a.entity, contact.b.entity) {
            (Some(a), Some(b)) => {
                let check_a = contact.a.masks.wants_check(contact.b.masks.kind);
                let check_b = contact.b.masks.wants_check(contact.a.masks.kind);
                if check_a {
                    self.bump_check(a, b, 1);
                }
                if check_b {
                    self.bump_check(b, a, 1);
                }
                // A pair with check interest on either side is a trigger
                // overlap, not a physical collision.
                if !check_a && !check_b {
                    let axis = Axis::from_normal(contact.normal);
                    self.set_collide(a, b, axis);
                    self.set_collide(b, a, axis);
                }
            }
            // Exactly one side is a game entity: terrain contact, keyed by
            // the terrain body so a corner landing (wall and floor in the
            // same frame) keeps both records.
            (Some(entity), None) => {
                self.set_trace(entity, contact.b.body, contact.normal);
            }
            (None, Some(entity)) => {
                self.set_trace(entity, contact.a.body, contact.normal);
            }
            // Terrain never touches terrain; nothing to do by construction.
            (None, None) => {}
        }
    }

    fn end_immediate(&mut self, contact: &Contact) {
        if let (Some(a), Some(b)) = (contact.a.entity, contact.b.entity) {
            if contact.a.masks.wants_check(contact.b.masks.kind) {
                self.bump_check(a, b, -1);
            }
            if contact.b.masks.wants_check(contact.a.masks.kind) {
                self.bump_check(b, a, -1);
            }
            // End-contact never touches the collide queue.
        }
    }

    fn record_buffered(&mut self, phase: ContactPhase, contact: &Contact) {
        self.buffer.push(BufferedContact {
            phase,
            entity_a: contact.a.entity,
            entity_b: contact.b.entity,
            normal: contact.normal,
        });
    }
}

impl ContactListener for ContactState {
    fn begin_contact(&mut self, contact: &Contact) {
        match self.mode {
            ContactMode::Immediate => self.begin_immediate(contact),
            ContactMode::Buffered => self.record_buffered(ContactPhase::Begin, contact),
        }
    }

    fn end_contact(&mut self, contact: &Contact) {
        match self.mode {
            ContactMode::Immediate => self.end_immediate(contact),
            ContactMode::Buffered => self.record_buffered(ContactPhase::End, contact),
        }
    }
}

/// Per-axis outcome of a terrain contact.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TraceCollision {
    pub x: bool,
    pub y: bool,
    pub slope: bool,
}

/// Synthetic result describing how terrain halted or deflected an entity's
/// movement. Ephemeral: built per contact and handed straight to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementTrace {
    pub collision: TraceCollision,
    /// Boundary-adjusted entity position in world pixels.
    pub pos: Vec2,
    /// Tangent angle of the surface for slope contacts.
    pub slope_angle: Option<f32>,
    /// Tile occupying the resolved position, if the lookup landed in bounds.
    pub tile: Option<u32>,
}

/// Convert a terrain contact normal into a movement trace.
///
/// Positions are converted out of physics units (`pos / scale`), re-anchored
/// to the entity's top-left corner, and snapped along each axis-aligned
/// normal component toward the direction of motion. A non-axis-aligned
/// component marks that axis as a slope instead, with the slope angle taken
/// from the normal's orthogonal.
pub fn build_movement_trace(
    normal: Vec2,
    entity_pos: Vec2,
    entity_vel: Vec2,
    entity_size: Vec2,
    scale: f32,
    tile_at: impl FnOnce(Vec2) -> Option<u32>,
) -> MovementTrace {
    let mut collision = TraceCollision::default();
    let mut slope_angle = None;
    let mut pos = entity_pos / scale - entity_size / 2.0;

    if normal.x.abs() == 1.0 {
        if entity_vel.x > 0.0 {
            pos.x += entity_size.x;
        }
        collision.x = true;
    } else if normal.x != 0.0 {
        collision.slope = true;
        slope_angle = Some(normal.x.atan2(-normal.y));
    }
    if normal.y.abs() == 1.0 {
        if entity_vel.y > 0.0 {
            pos.y += entity_size.y;
        }
        collision.y = true;
    } else if normal.y != 0.0 {
        collision.slope = true;
        slope_angle = Some(normal.x.atan2(-normal.y));
    }

    let tile = tile_at(pos);
    MovementTrace {
        collision,
        pos,
        slope_angle,
        tile,
    }
}
