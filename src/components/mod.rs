//! ECS components for physics-attached entities.
//!
//! These are the per-entity attributes the bridge consumes: where the entity
//! is, how it moves, how big its box is, which entity kinds it reacts to,
//! and which physics body represents it.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned box extents for the entity's fixture
//! - [`collisionmasks`] – type/check-against bitmasks gating notifications
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`physicsbody`] – link from an entity to its body in the physics world
//! - [`rigidbody`] – simple kinematic body storing velocity

pub mod boxcollider;
pub mod collisionmasks;
pub mod mapposition;
pub mod physicsbody;
pub mod rigidbody;
