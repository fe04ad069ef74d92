//! Greedy decomposition of a collision tile layer into solid rectangles.
//!
//! A level's collision layer is a grid of solid/empty tiles. Creating one
//! static physics body per solid tile would flood the physics world, so the
//! grid is tiled with maximal axis-aligned rectangles instead: each rectangle
//! becomes a single static body in
//! [`build_collision_world`](crate::physics::build_collision_world).
//!
//! The algorithm is a row-major scan. The first unprocessed solid tile
//! anchors a rectangle, the rectangle grows right as far as the row allows,
//! then grows down one full row at a time, but only while the next row is
//! solid across the rectangle's entire width. Consumed tiles are zeroed in a
//! scratch copy of the grid so the outer scan skips them.

use crate::resources::collisionmap::TileGrid;

/// Axis-aligned run of solid tiles, in tile-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SolidRect {
    /// Whether the given tile coordinate lies inside this rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Tile the solid cells of `grid` with non-overlapping rectangles.
///
/// The union of the returned rectangles covers exactly the solid tiles of
/// the grid, and the list is ordered by the row-major position of each
/// rectangle's top-left anchor, so repeated runs over the same grid produce
/// the same list. The caller's grid is never modified; the scan works on a
/// private scratch copy.
pub fn extract_solid_rects(grid: &TileGrid) -> Vec<SolidRect> {
    // Scratch copy: consumed tiles are zeroed as rectangles claim them.
    let mut data = grid.data.clone();
    let mut rects = Vec::new();

    for y in 0..grid.height {
        for x in 0..grid.width {
            if data[y][x] != 0 {
                rects.push(extract_rect_at(&mut data, grid.width, grid.height, x, y));
            }
        }
    }
    rects
}

/// Grow one rectangle anchored at the solid tile (x, y), zeroing every tile
/// it claims.
fn extract_rect_at(
    data: &mut [Vec<u32>],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
) -> SolidRect {
    let mut rect = SolidRect {
        x: x as u32,
        y: y as u32,
        width: 1,
        height: 1,
    };

    // Width first: consume the contiguous solid run to the right.
    let mut wx = x + 1;
    while wx < width && data[y][wx] != 0 {
        rect.width += 1;
        data[y][wx] = 0;
        wx += 1;
    }
    let rect_width = rect.width as usize;

    // Height: a row extends the rectangle only if it is solid across the
    // full established width. A partial row is left untouched for a later
    // rectangle to claim.
    for wy in (y + 1)..height {
        let row_width = (x..x + rect_width)
            .take_while(|&wx| data[wy][wx] != 0)
            .count();
        if row_width != rect_width {
            return rect;
        }
        rect.height += 1;
        for wx in x..x + rect_width {
            data[wy][wx] = 0;
        }
    }
    rect
}
