//! Messages exchanged between the bridge and the host game.
//!
//! The resolver systems write these once per frame; the host reads them with
//! a `MessageReader` and applies its entity behavior (trigger logic,
//! physical response, movement correction). This keeps the bridge decoupled
//! from entity code.
//!
//! Submodules:
//! - [`collision`] – check, collide, and movement-trace notifications

pub mod collision;
