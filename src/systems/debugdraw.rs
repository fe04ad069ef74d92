//! Debug outlines for the extracted collision rectangles.
//!
//! When the [`DebugMode`] marker resource is present, this system rebuilds
//! [`DebugOutlines`] each frame: one unfilled screen-space rectangle per
//! solid rect, offset by the camera scroll. The host renderer decides how to
//! stroke them; this crate only produces geometry.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::resources::camera::Camera;
use crate::resources::collisionmap::CollisionMap;
use crate::resources::debugmode::DebugMode;
use crate::resources::physicsworld::CollisionRects;

/// One unfilled rectangle in screen space, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineRect {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Screen-space outlines of the level's collision rectangles, refreshed
/// each frame while debug mode is on, empty otherwise.
#[derive(Resource, Debug, Clone, Default)]
pub struct DebugOutlines(pub Vec<OutlineRect>);

pub fn debug_collision_outlines(
    debug: Option<Res<DebugMode>>,
    rects: Option<Res<CollisionRects>>,
    map: Option<Res<CollisionMap>>,
    camera: Option<Res<Camera>>,
    outlines: Option<ResMut<DebugOutlines>>,
) {
    let Some(mut outlines) = outlines else { return };
    outlines.0.clear();
    if debug.is_none() {
        return;
    }
    let (Some(rects), Some(map)) = (rects, map) else {
        return;
    };
    let scroll = camera.map(|c| c.scroll).unwrap_or_default();
    let ts = map.tilesize;
    for rect in &rects.0 {
        outlines.0.push(OutlineRect {
            pos: Vec2::new(
                rect.x as f32 * ts - scroll.x,
                rect.y as f32 * ts - scroll.y,
            ),
            size: Vec2::new(rect.width as f32 * ts, rect.height as f32 * ts),
        });
    }
}
