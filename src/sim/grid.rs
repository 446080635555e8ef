//! Tile grid storage and procedural world generation
//!
//! The grid is built once per session and is read-only during play.
//! Lookups outside the grid report solid brick, so nothing can leave the
//! world no matter how far a sweep reaches.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Identifier stored in each grid cell (0 = empty, anything else is solid)
pub type TileId = u16;

/// Parameters for procedural grid generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridParams {
    pub width: u32,
    pub height: u32,
    /// Number of platforms to drop into the interior
    pub platform_count: u32,
    /// Length in tiles of every platform run
    pub platform_width: u32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            platform_count: PLATFORM_COUNT,
            platform_width: PLATFORM_WIDTH,
        }
    }
}

/// Fixed-size 2D tile map, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<TileId>,
}

impl Grid {
    /// An all-empty grid with no border
    pub fn empty(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid must have at least one tile");
        Self {
            width,
            height,
            tiles: vec![EMPTY_TILE; width as usize * height as usize],
        }
    }

    /// An empty interior surrounded by a one-tile brick border
    pub fn bordered(width: u32, height: u32) -> Self {
        let mut grid = Self::empty(width, height);
        for y in 0..height {
            grid.set(0, y, BRICK_TILE);
            grid.set(width - 1, y, BRICK_TILE);
        }
        for x in 0..width {
            grid.set(x, 0, BRICK_TILE);
            grid.set(x, height - 1, BRICK_TILE);
        }
        grid
    }

    /// Build a bordered world and scatter horizontal platforms through it.
    ///
    /// Platforms never touch the border but may overlap each other.
    pub fn generate<R: Rng>(params: &GridParams, rng: &mut R) -> Self {
        assert!(
            params.width >= 3 && params.height >= 3,
            "grid {}x{} has no interior",
            params.width,
            params.height
        );
        assert!(
            params.platform_width >= 1 && params.platform_width <= params.width - 2,
            "platform width {} does not fit a {}-tile interior",
            params.platform_width,
            params.width - 2
        );

        let mut grid = Self::bordered(params.width, params.height);

        for _ in 0..params.platform_count {
            let plat_x = rng.random_range(1..params.width - params.platform_width);
            let plat_y = rng.random_range(1..params.height - 1);
            for tile in 0..params.platform_width {
                grid.set(plat_x + tile, plat_y, BRICK_TILE);
            }
        }

        log::info!(
            "Generated {}x{} grid: {} platforms, {} solid tiles",
            params.width,
            params.height,
            params.platform_count,
            grid.solid_count()
        );

        grid
    }

    /// Parse a grid from text rows: `#` is brick, anything else is empty.
    ///
    /// All rows must have the same length.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
        let mut grid = Self::empty(width, height);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(
                row.chars().count() as u32,
                width,
                "row {} has the wrong length",
                y
            );
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    grid.set(x as u32, y as u32, BRICK_TILE);
                }
            }
        }
        grid
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile at the given position. Anything outside the map is brick.
    #[inline]
    pub fn tile_at(&self, x: i32, y: i32) -> TileId {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            self.tiles[y as usize * self.width as usize + x as usize]
        } else {
            BRICK_TILE
        }
    }

    #[inline]
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.tile_at(x, y) != EMPTY_TILE
    }

    pub fn solid_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t != EMPTY_TILE).count()
    }

    /// Nearest open tile to `near`, searching square rings outward.
    ///
    /// Within a ring, rows are visited top to bottom and tiles left to right,
    /// so the result is deterministic.
    pub fn find_open_tile(&self, near: IVec2) -> Option<IVec2> {
        // Far enough to reach every tile even when starting off the map
        let max_ring = self.width.max(self.height) as i32 + near.x.abs().max(near.y.abs());
        for ring in 0..=max_ring {
            for dy in -ring..=ring {
                for dx in -ring..=ring {
                    if dx.abs() != ring && dy.abs() != ring {
                        continue;
                    }
                    let tile = near + IVec2::new(dx, dy);
                    if !self.is_solid(tile.x, tile.y) {
                        return Some(tile);
                    }
                }
            }
        }
        None
    }

    fn set(&mut self, x: u32, y: u32, id: TileId) {
        let idx = y as usize * self.width as usize + x as usize;
        self.tiles[idx] = id;
    }
}
