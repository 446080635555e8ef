//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, passed in explicitly
//! - Stable iteration order (by entity ID)
//! - The grid is read-only once a session starts
//! - No rendering or platform dependencies

pub mod body;
pub mod camera;
pub mod collision;
pub mod direction;
pub mod grid;
pub mod lantern;
pub mod movement;
pub mod state;
pub mod tick;

pub use body::Body;
pub use camera::{Camera, Viewport};
pub use collision::{SweepResult, covered_tiles, sweep};
pub use direction::{Direction, Heading};
pub use grid::{Grid, GridParams, TileId};
pub use lantern::Lantern;
pub use movement::{Intent, MovementParams, accelerate, step};
pub use state::{Actor, Controller, GamePhase, GameState};
pub use tick::{TickInput, player_hits, tick};
