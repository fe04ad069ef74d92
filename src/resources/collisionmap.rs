//! Level layer data and the collision map resource.
//!
//! Levels arrive as JSON with named tile layers. The layer named
//! `collision` carries the occupancy grid this crate turns into physics
//! bodies; the same grid stays available at runtime as [`CollisionMap`] so
//! terrain traces can report which tile an entity ran into.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Name of the layer that carries collision data.
pub const COLLISION_LAYER: &str = "collision";

/// One named tile layer of a level.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelLayer {
    pub name: String,
    /// Tile ids indexed `[row][col]`; 0 is empty, non-zero is solid.
    pub data: Vec<Vec<u32>>,
    /// Layer width in tiles.
    pub width: u32,
    /// Layer height in tiles.
    pub height: u32,
    /// Size of a tile in pixels.
    pub tilesize: f32,
}

/// Level data as loaded from disk.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelData {
    #[serde(rename = "layer")]
    pub layers: Vec<LevelLayer>,
}

impl LevelData {
    /// Parse level data from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The first layer named `collision`, if the level has one. Levels
    /// without physics simply omit it.
    pub fn collision_layer(&self) -> Option<&LevelLayer> {
        self.layers.iter().find(|l| l.name == COLLISION_LAYER)
    }
}

/// Tile occupancy grid in tile units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    pub data: Vec<Vec<u32>>,
    pub width: usize,
    pub height: usize,
}

impl TileGrid {
    /// Grid copied out of a level layer. Rows shorter than the declared
    /// width read as empty beyond their end.
    pub fn from_layer(layer: &LevelLayer) -> Self {
        let width = layer.width as usize;
        let height = layer.height as usize;
        let mut data = layer.data.clone();
        data.resize(height, Vec::new());
        for row in &mut data {
            row.resize(width, 0);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Tile id at a tile coordinate; `None` out of bounds.
    pub fn tile(&self, x: usize, y: usize) -> Option<u32> {
        self.data.get(y).and_then(|row| row.get(x)).copied()
    }
}

/// The level's collision grid, queryable by world position.
///
/// Owned by the level context and rebuilt on level load, alongside the
/// physics world derived from it.
#[derive(Resource, Debug, Clone)]
pub struct CollisionMap {
    pub grid: TileGrid,
    pub tilesize: f32,
}

impl CollisionMap {
    pub fn new(grid: TileGrid, tilesize: f32) -> Self {
        Self { grid, tilesize }
    }

    /// Tile id occupying a world-pixel position; `None` outside the map.
    pub fn get_tile(&self, world_pos: Vec2) -> Option<u32> {
        let tx = (world_pos.x / self.tilesize).floor();
        let ty = (world_pos.y / self.tilesize).floor();
        if tx < 0.0 || ty < 0.0 {
            return None;
        }
        self.grid.tile(tx as usize, ty as usize)
    }
}
