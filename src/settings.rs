//! Presentation settings and preferences
//!
//! Kept apart from gameplay tuning: nothing here changes where bodies end
//! up, only how the world is framed on screen.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Camera, Lantern, Viewport};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Map zoom, shared by everything drawn on the map
    pub zoom: f32,
    /// Camera easing per tick (0 - 1)
    pub camera_smoothing: f32,
    /// Reduced motion (camera locks onto the player instead of easing)
    pub reduced_motion: bool,
    /// Player lantern lighting
    pub lantern_enabled: bool,
    /// Render target size
    pub viewport: Viewport,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            zoom: MAP_ZOOM,
            camera_smoothing: CAMERA_SMOOTHING,
            reduced_motion: false,
            lantern_enabled: true,
            viewport: Viewport::default(),
        }
    }
}

impl Settings {
    /// Effective camera easing (respects reduced_motion)
    pub fn effective_smoothing(&self) -> f32 {
        if self.reduced_motion {
            1.0
        } else {
            self.camera_smoothing
        }
    }

    /// Camera framed with these settings, looking at the start tile
    pub fn camera(&self) -> Camera {
        Camera {
            zoom: self.zoom,
            smoothing: self.effective_smoothing(),
            ..Camera::default()
        }
    }

    /// Player lantern as configured by these settings
    pub fn lantern(&self) -> Lantern {
        Lantern::new(self.lantern_enabled)
    }

    /// Parse settings JSON, falling back to defaults for anything unusable
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file (defaults if missing or invalid)
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with their defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.zoom > 0.0) || !self.zoom.is_finite() {
            log::warn!("Invalid zoom {}, using {}", self.zoom, defaults.zoom);
            self.zoom = defaults.zoom;
        }
        if !(self.camera_smoothing > 0.0 && self.camera_smoothing <= 1.0) {
            log::warn!(
                "Invalid camera smoothing {}, using {}",
                self.camera_smoothing,
                defaults.camera_smoothing
            );
            self.camera_smoothing = defaults.camera_smoothing;
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            self.viewport = defaults.viewport;
        }
        self
    }
}
