//! Per-frame systems.
//!
//! Submodules overview
//! - [`contacts`] – step the physics world, then resolve contact state into
//!   check/collide/trace messages
//! - [`debugdraw`] – publish collision rectangle outlines in screen space
//! - [`time`] – update simulation time and delta

pub mod contacts;
pub mod debugdraw;
pub mod time;
