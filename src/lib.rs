//! Bridge between a tile-based 2D game and a rigid-body physics engine.
//!
//! One direction: the level's `collision` tile layer is decomposed into a
//! minimal set of solid rectangles ([`rects`]) and built into static physics
//! bodies ([`physics`]). The other direction: the physics engine's begin/end
//! contact callbacks are translated ([`contacts`]) and resolved
//! ([`systems::contacts`]) into the game's collision semantics. Check,
//! collide, and movement-trace notifications reach the host as ECS messages
//! ([`events`]).

pub mod components;
pub mod contacts;
pub mod events;
pub mod game;
pub mod physics;
pub mod rects;
pub mod resources;
pub mod systems;
