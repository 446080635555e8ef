//! Tilerun - a scrolling tile-grid platform game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, tile collision, movement, camera)
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences

pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Tile id for open space
    pub const EMPTY_TILE: u16 = 0;
    /// Tile id for brick (solid)
    pub const BRICK_TILE: u16 = 1;

    /// World dimensions in tiles
    pub const MAP_WIDTH: u32 = 64;
    pub const MAP_HEIGHT: u32 = 64;

    /// Random platform generation
    pub const PLATFORM_COUNT: u32 = 100;
    pub const PLATFORM_WIDTH: u32 = 6;

    /// Player spawn tile (bottom-left of the map, just above the floor)
    pub const PLAYER_SPAWN: (f32, f32) = (5.0, 62.0);

    /// Player movement (tiles per tick)
    pub const PLAYER_ACCEL: f32 = 0.008;
    pub const PLAYER_DECEL: f32 = 0.02;
    pub const PLAYER_MAX_SPEED: f32 = 0.35;

    /// Patrols amble, they never sprint
    pub const PATROL_ACCEL: f32 = 0.004;
    pub const PATROL_DECEL: f32 = 0.01;
    pub const PATROL_MAX_SPEED: f32 = 0.12;

    /// Width and height in pixels of each tile before zoom
    pub const TILE_SIZE_PX: f32 = 32.0;
    /// Default zoom applied to everything drawn on the map
    pub const MAP_ZOOM: f32 = 1.5;
    /// Fraction of the remaining distance the camera covers each tick
    pub const CAMERA_SMOOTHING: f32 = 0.1;
    /// Tile the camera looks at before the first tick
    pub const CAMERA_START: (f32, f32) = (8.0, 56.0);

    /// Lantern glow
    pub const LANTERN_SCALE: f32 = 15.0;
    pub const LANTERN_STEP: f32 = 0.1;
    pub const LANTERN_MIN_SCALE: f32 = 0.1;
}

/// Move `value` toward zero by `amount`, landing exactly on zero instead of
/// crossing it.
#[inline]
pub fn tend_to_zero(value: f32, amount: f32) -> f32 {
    if value > 0.0 {
        (value - amount).max(0.0)
    } else if value < 0.0 {
        (value + amount).min(0.0)
    } else {
        value
    }
}

/// True when `value` lies exactly on a tile boundary
#[inline]
pub fn is_integral(value: f32) -> bool {
    value.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tend_to_zero_lands_on_zero() {
        assert_eq!(tend_to_zero(0.015, 0.02), 0.0);
        assert_eq!(tend_to_zero(-0.015, 0.02), 0.0);
    }

    #[test]
    fn test_tend_to_zero_shrinks_magnitude() {
        assert!((tend_to_zero(0.3, 0.02) - 0.28).abs() < 1e-6);
        assert!((tend_to_zero(-0.3, 0.02) + 0.28).abs() < 1e-6);
        assert_eq!(tend_to_zero(0.0, 0.02), 0.0);
    }

    #[test]
    fn test_integral_detection() {
        assert!(is_integral(5.0));
        assert!(is_integral(0.0));
        assert!(is_integral(-3.0));
        assert!(!is_integral(4.999));
        assert!(!is_integral(0.5));
    }
}
