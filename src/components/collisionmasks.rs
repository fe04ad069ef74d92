//! Bitmask component gating collision notifications.
//!
//! `kind` says what an entity is; `check_against` says which kinds it wants
//! non-physical "check" notifications for. The two are independent: a pair
//! can check without colliding and collide without checking.

use bevy_ecs::prelude::Component;

/// Type and interest bitmasks for a physics-attached entity.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionMasks {
    /// What this entity is (bitmask, one or more kind bits).
    pub kind: u8,
    /// Which kinds trigger a check notification on overlap.
    pub check_against: u8,
}

impl CollisionMasks {
    pub fn new(kind: u8, check_against: u8) -> Self {
        Self {
            kind,
            check_against,
        }
    }

    /// Whether an overlap with an entity of `other_kind` should fire a
    /// check notification on this entity.
    pub fn wants_check(&self, other_kind: u8) -> bool {
        self.check_against & other_kind != 0
    }
}
