//! Boundary types for the external rigid-body physics engine.
//!
//! The solver (broad phase, narrow phase, integration) lives outside this
//! crate. What this module owns is the shape of the seam: a world of
//! box-fixture bodies, a non-owning back-reference from each body to the ECS
//! entity it represents, and a contact listener that receives begin/end
//! notifications synchronously during [`PhysicsWorld::step`]. The host engine
//! (or a test) reports contact transitions between steps via
//! [`PhysicsWorld::report_begin`] / [`PhysicsWorld::report_end`]; the next
//! step dispatches them in report order.

use bevy_ecs::prelude::Entity;
use glam::Vec2;
use log::{debug, trace};

use crate::components::collisionmasks::CollisionMasks;
use crate::rects::SolidRect;

/// Stable handle to a body inside a [`PhysicsWorld`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Terrain body built from the collision layer; never moves.
    Static,
    /// Body owned by a game entity.
    Dynamic,
}

/// A rigid body with a single box fixture, in physics-engine length units.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub kind: BodyKind,
    /// Center of the box fixture.
    pub position: Vec2,
    pub half_extents: Vec2,
    /// Back-reference to the owning game entity. `None` marks terrain.
    /// The world owns the body; the entity owns nothing of it.
    pub entity: Option<Entity>,
    /// Mask snapshot taken from the entity's [`CollisionMasks`] at body
    /// creation, readable from inside contact callbacks where the ECS world
    /// is not accessible.
    pub masks: CollisionMasks,
}

/// One side of a contact, resolved to its entity (if any) at dispatch time.
#[derive(Debug, Clone, Copy)]
pub struct ContactSide {
    pub body: BodyId,
    pub entity: Option<Entity>,
    pub masks: CollisionMasks,
}

/// A reported overlap between two fixtures, with the manifold's local-plane
/// normal.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub a: ContactSide,
    pub b: ContactSide,
    pub normal: Vec2,
}

/// Receiver for contact notifications dispatched during [`PhysicsWorld::step`].
///
/// Callbacks run synchronously on the stepping thread; no contact is
/// delivered outside the step call.
pub trait ContactListener {
    fn begin_contact(&mut self, contact: &Contact);
    fn end_contact(&mut self, contact: &Contact);
}

#[derive(Debug, Clone, Copy)]
enum ContactPhase {
    Begin,
    End,
}

/// The physics world handle owned by the level context.
///
/// Rebuilt wholesale on every level load; there is no incremental body
/// diffing. Gravity is zero because per-entity gravity is applied by the
/// host's own movement systems, and sleeping is allowed since terrain bodies
/// never need per-frame solver work.
pub struct PhysicsWorld {
    pub gravity: Vec2,
    pub allow_sleep: bool,
    /// Physics-engine length units per world pixel.
    pub scale: f32,
    bodies: Vec<Body>,
    pending: Vec<(ContactPhase, BodyId, BodyId, Vec2)>,
}

impl PhysicsWorld {
    pub fn new(gravity: Vec2, allow_sleep: bool, scale: f32) -> Self {
        Self {
            gravity,
            allow_sleep,
            scale,
            bodies: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Add a static terrain body with a box fixture.
    pub fn create_static_body(&mut self, position: Vec2, half_extents: Vec2) -> BodyId {
        self.push_body(Body {
            kind: BodyKind::Static,
            position,
            half_extents,
            entity: None,
            masks: CollisionMasks::default(),
        })
    }

    /// Add a body owned by `entity`, carrying its mask snapshot.
    pub fn create_entity_body(
        &mut self,
        entity: Entity,
        masks: CollisionMasks,
        position: Vec2,
        half_extents: Vec2,
    ) -> BodyId {
        self.push_body(Body {
            kind: BodyKind::Dynamic,
            position,
            half_extents,
            entity: Some(entity),
            masks,
        })
    }

    fn push_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(body);
        id
    }

    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.0 as usize]
    }

    pub fn body_mut(&mut self, id: BodyId) -> &mut Body {
        &mut self.bodies[id.0 as usize]
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, body)| (BodyId(i as u32), body))
    }

    /// Queue a begin-contact transition for the next step.
    pub fn report_begin(&mut self, a: BodyId, b: BodyId, normal: Vec2) {
        self.pending.push((ContactPhase::Begin, a, b, normal));
    }

    /// Queue an end-contact transition for the next step.
    pub fn report_end(&mut self, a: BodyId, b: BodyId, normal: Vec2) {
        self.pending.push((ContactPhase::End, a, b, normal));
    }

    /// Advance the world one frame, dispatching every queued contact
    /// transition to `listener` in report order.
    ///
    /// Exactly one step per game frame; stepping is not re-entrant.
    pub fn step(&mut self, dt: f32, listener: &mut dyn ContactListener) {
        trace!(
            "physics step dt={dt} transitions={}",
            self.pending.len()
        );
        let pending = std::mem::take(&mut self.pending);
        for (phase, a, b, normal) in pending {
            let contact = Contact {
                a: self.contact_side(a),
                b: self.contact_side(b),
                normal,
            };
            match phase {
                ContactPhase::Begin => listener.begin_contact(&contact),
                ContactPhase::End => listener.end_contact(&contact),
            }
        }
    }

    fn contact_side(&self, id: BodyId) -> ContactSide {
        let body = self.body(id);
        ContactSide {
            body: id,
            entity: body.entity,
            masks: body.masks,
        }
    }
}

/// Build the static physics world for a level's collision rectangles.
///
/// One static body with one box fixture per rectangle, centered on the
/// rectangle and scaled from tile units through pixels into physics-engine
/// units. The rectangle list stays owned by the caller (it is also used for
/// debug rendering).
pub fn build_collision_world(rects: &[SolidRect], tilesize: f32, scale: f32) -> PhysicsWorld {
    // Gravity is applied to entities individually by the host.
    let mut world = PhysicsWorld::new(Vec2::ZERO, true, scale);

    for rect in rects {
        let w = rect.width as f32 * tilesize;
        let h = rect.height as f32 * tilesize;
        let position = Vec2::new(
            (rect.x as f32 * tilesize + w / 2.0) * scale,
            (rect.y as f32 * tilesize + h / 2.0) * scale,
        );
        let half_extents = Vec2::new(w / 2.0 * scale, h / 2.0 * scale);
        world.create_static_body(position, half_extents);
    }
    debug!(
        "built collision world: {} static bodies (tilesize={tilesize}, scale={scale})",
        world.body_count()
    );
    world
}
