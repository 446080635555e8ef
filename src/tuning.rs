//! Data-driven game balance
//!
//! Everything that shapes a session's world and how bodies move through it.
//! Loaded from JSON; any field left out keeps its default.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{GridParams, MovementParams};

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("world {width}x{height} has no interior")]
    WorldTooSmall { width: u32, height: u32 },
    #[error("platform width {platform_width} does not fit a {interior}-tile interior")]
    PlatformTooWide { platform_width: u32, interior: u32 },
    #[error("{what} size {size} must be within (0, 1] on both axes")]
    BadSize { what: &'static str, size: Vec2 },
    #[error("{what} movement is invalid: {reason}")]
    BadMovement {
        what: &'static str,
        reason: &'static str,
    },
    #[error("spawn {spawn} lies outside the {width}x{height} world")]
    SpawnOutside { spawn: Vec2, width: u32, height: u32 },
}

/// World generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    pub width: u32,
    pub height: u32,
    pub platform_count: u32,
    pub platform_width: u32,
    /// Where the player starts (top-left of the body, in tiles)
    pub spawn: Vec2,
    /// Wandering bodies placed at random open tiles
    pub patrol_count: u32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        let grid = GridParams::default();
        Self {
            width: grid.width,
            height: grid.height,
            platform_count: grid.platform_count,
            platform_width: grid.platform_width,
            spawn: Vec2::from(PLAYER_SPAWN),
            patrol_count: 0,
        }
    }
}

impl WorldTuning {
    pub fn grid_params(&self) -> GridParams {
        GridParams {
            width: self.width,
            height: self.height,
            platform_count: self.platform_count,
            platform_width: self.platform_width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world: WorldTuning,
    pub player: MovementParams,
    pub player_size: Vec2,
    pub patrol: MovementParams,
    pub patrol_size: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world: WorldTuning::default(),
            player: MovementParams::player(),
            player_size: Vec2::ONE,
            patrol: MovementParams::patrol(),
            patrol_size: Vec2::ONE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let world = &self.world;
        if world.width < 3 || world.height < 3 {
            return Err(TuningError::WorldTooSmall {
                width: world.width,
                height: world.height,
            });
        }
        let interior = world.width - 2;
        if world.platform_width == 0 || world.platform_width > interior {
            return Err(TuningError::PlatformTooWide {
                platform_width: world.platform_width,
                interior,
            });
        }

        let spawn = world.spawn;
        if !spawn.is_finite()
            || spawn.x < 0.0
            || spawn.y < 0.0
            || spawn.x >= world.width as f32
            || spawn.y >= world.height as f32
        {
            return Err(TuningError::SpawnOutside {
                spawn,
                width: world.width,
                height: world.height,
            });
        }

        check_size("player", self.player_size)?;
        check_size("patrol", self.patrol_size)?;
        check_movement("player", &self.player)?;
        check_movement("patrol", &self.patrol)?;
        Ok(())
    }
}

/// Bodies no bigger than a tile always fit on any open tile
fn check_size(what: &'static str, size: Vec2) -> Result<(), TuningError> {
    let fits = |v: f32| v > 0.0 && v <= 1.0;
    if fits(size.x) && fits(size.y) {
        Ok(())
    } else {
        Err(TuningError::BadSize { what, size })
    }
}

fn check_movement(what: &'static str, params: &MovementParams) -> Result<(), TuningError> {
    let reason = if !(params.max_speed > 0.0 && params.max_speed.is_finite()) {
        "max_speed must be positive and finite"
    } else if !(params.accel >= 0.0 && params.accel.is_finite()) {
        "accel must be finite and not negative"
    } else if !(params.decel >= 0.0 && params.decel.is_finite()) {
        "decel must be finite and not negative"
    } else {
        return Ok(());
    };
    Err(TuningError::BadMovement { what, reason })
}
