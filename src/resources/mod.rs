//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world and accessed by systems
//! during execution. Each submodule documents the semantics of its
//! resource(s).
//!
//! Overview
//! - `camera` – scroll offset used by the debug-outline system
//! - `collisionmap` – level layer data and the tile lookup for traces
//! - `debugmode` – presence toggles optional debug output
//! - `physicsworld` – the level's physics world and its collision rects
//! - `worldtime` – simulation time and delta

pub mod camera;
pub mod collisionmap;
pub mod debugmode;
pub mod physicsworld;
pub mod worldtime;
