//! The player's light
//!
//! The world is dark apart from the glow around the player. The glow can be
//! turned up and down; dimming it all the way puts it out until it is
//! brightened again. With lighting switched off in the settings the lantern
//! ignores input and lights nothing.

use glam::Vec2;

use crate::consts::*;

/// Glow radius in tiles per unit of lantern scale
pub const GLOW_RADIUS_PER_SCALE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lantern {
    /// Size of the glow sprite relative to its native resolution
    pub scale: f32,
    pub visible: bool,
    /// Lighting switch from the settings
    pub enabled: bool,
}

impl Default for Lantern {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Lantern {
    pub fn new(enabled: bool) -> Self {
        Self {
            scale: LANTERN_SCALE,
            visible: enabled,
            enabled,
        }
    }

    /// Apply one tick of brighten/dim input. Both may be held at once.
    pub fn adjust(&mut self, brighten: bool, dim: bool) {
        if !self.enabled {
            return;
        }
        if brighten {
            self.scale += LANTERN_STEP;
            if !self.visible {
                log::debug!("Lantern relit at scale {:.1}", self.scale);
                self.visible = true;
            }
        }

        if dim {
            self.scale -= LANTERN_STEP;
            if self.scale <= 0.0 {
                self.scale = LANTERN_MIN_SCALE;
                if self.visible {
                    log::debug!("Lantern went out");
                }
                self.visible = false;
            }
        }
    }

    /// Radius of the lit area in tiles (zero when the light is out)
    pub fn radius(&self) -> f32 {
        if self.enabled && self.visible {
            self.scale * GLOW_RADIUS_PER_SCALE
        } else {
            0.0
        }
    }

    /// Whether `point` is lit by the lantern held at `origin`
    pub fn illuminates(&self, origin: Vec2, point: Vec2) -> bool {
        self.radius() > 0.0 && origin.distance_squared(point) <= self.radius() * self.radius()
    }
}
