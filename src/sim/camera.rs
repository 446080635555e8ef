//! World/screen mapping and the following camera
//!
//! World space is measured in tiles with y pointing down, the same as
//! screen space, so the mapping is a translate and a uniform scale.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Size of the render target in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * 0.5
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World position drawn at the middle of the screen
    pub center: Vec2,
    /// Zoom applied on top of the tile pixel size
    pub zoom: f32,
    /// Fraction of the remaining distance covered per tick (1.0 snaps)
    pub smoothing: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: Vec2::from(CAMERA_START),
            zoom: MAP_ZOOM,
            smoothing: CAMERA_SMOOTHING,
        }
    }
}

impl Camera {
    /// Screen pixels per world tile
    #[inline]
    pub fn pixels_per_tile(&self) -> f32 {
        self.zoom * TILE_SIZE_PX
    }

    /// Ease the center toward `target`
    pub fn follow(&mut self, target: Vec2) {
        self.center += (target - self.center) * self.smoothing;
    }

    pub fn world_to_screen(&self, pos: Vec2, viewport: Viewport) -> Vec2 {
        (pos - self.center) * self.pixels_per_tile() + viewport.half_size()
    }

    pub fn screen_to_world(&self, pos: Vec2, viewport: Viewport) -> Vec2 {
        (pos - viewport.half_size()) / self.pixels_per_tile() + self.center
    }

    /// Inclusive range of tiles that show up on screen
    pub fn visible_tiles(&self, viewport: Viewport) -> (IVec2, IVec2) {
        let top_left = self.screen_to_world(Vec2::ZERO, viewport);
        let bottom_right = self.screen_to_world(
            Vec2::new(viewport.width as f32, viewport.height as f32),
            viewport,
        );
        (top_left.floor().as_ivec2(), bottom_right.floor().as_ivec2())
    }
}
