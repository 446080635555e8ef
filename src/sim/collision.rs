//! Swept tile collision
//!
//! The tricky part of Tilerun: deciding how far a box can travel along one
//! axis before it runs into brick. A move is described by the rectangle the
//! box sweeps through during the tick, and the tiles under that rectangle
//! are scanned in the order the box would reach them.
//!
//! A rectangle whose far edge lies exactly on a tile boundary only touches
//! the next tile, it does not enter it. The far tile index is pulled back by
//! one in that case so a box resting flush against a floor or wall does not
//! collide with it sideways.

use glam::{IVec2, Vec2};

use super::direction::Heading;
use super::grid::Grid;
use crate::is_integral;

/// Result of sweeping a rectangle through the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepResult {
    /// Whether the move ran into brick
    pub blocked: bool,
    /// Furthest coordinate reached along the axis of travel.
    ///
    /// When blocked this is the near face of the first solid tile, otherwise
    /// the far edge of the swept rectangle.
    pub limit: f32,
}

impl SweepResult {
    pub fn clear(limit: f32) -> Self {
        Self {
            blocked: false,
            limit,
        }
    }

    pub fn hit(limit: f32) -> Self {
        Self {
            blocked: true,
            limit,
        }
    }
}

/// Inclusive tile range covered by the rectangle `origin..origin + extent`
///
/// The far index on each axis is pulled back by one when the far edge is an
/// exact integer.
pub fn covered_tiles(origin: Vec2, extent: Vec2) -> (IVec2, IVec2) {
    let far = origin + extent;
    let min = origin.floor().as_ivec2();
    let mut max = far.floor().as_ivec2();
    if is_integral(far.x) {
        max.x -= 1;
    }
    if is_integral(far.y) {
        max.y -= 1;
    }
    (min, max)
}

/// Sweep the rectangle at `origin` with size `extent` through the grid,
/// travelling in `heading`.
///
/// The rectangle must already include the full displacement for the tick:
/// for a box moving right by `d`, it starts at the box's right edge and is
/// `d` wide.
///
/// If nothing inside the rectangle is solid but its far edge sits exactly on
/// the face of a solid tile, the move is reported as blocked at that face.
/// The box has made contact, so the caller stops it there.
///
/// # Panics
///
/// Panics if `extent` is negative on either axis or any coordinate is not
/// finite.
pub fn sweep(grid: &Grid, origin: Vec2, extent: Vec2, heading: Heading) -> SweepResult {
    assert!(
        origin.is_finite() && extent.is_finite(),
        "sweep rectangle must be finite: origin={origin}, extent={extent}"
    );
    assert!(
        extent.x >= 0.0 && extent.y >= 0.0,
        "sweep extent must be non-negative: {extent}"
    );

    let far = origin + extent;
    let (min, max) = covered_tiles(origin, extent);

    match heading {
        Heading::Right => {
            for x in min.x..=max.x {
                if column_blocked(grid, x, min.y, max.y) {
                    return SweepResult::hit(x as f32);
                }
            }
            if is_integral(far.x) && column_blocked(grid, far.x as i32, min.y, max.y) {
                return SweepResult::hit(far.x);
            }
            SweepResult::clear(far.x)
        }
        Heading::Left => {
            for x in (min.x..=max.x).rev() {
                if column_blocked(grid, x, min.y, max.y) {
                    return SweepResult::hit((x + 1) as f32);
                }
            }
            if is_integral(origin.x) && column_blocked(grid, min.x - 1, min.y, max.y) {
                return SweepResult::hit(origin.x);
            }
            SweepResult::clear(origin.x)
        }
        Heading::Down => {
            for y in min.y..=max.y {
                if row_blocked(grid, y, min.x, max.x) {
                    return SweepResult::hit(y as f32);
                }
            }
            if is_integral(far.y) && row_blocked(grid, far.y as i32, min.x, max.x) {
                return SweepResult::hit(far.y);
            }
            SweepResult::clear(far.y)
        }
        Heading::Up => {
            for y in (min.y..=max.y).rev() {
                if row_blocked(grid, y, min.x, max.x) {
                    return SweepResult::hit((y + 1) as f32);
                }
            }
            if is_integral(origin.y) && row_blocked(grid, min.y - 1, min.x, max.x) {
                return SweepResult::hit(origin.y);
            }
            SweepResult::clear(origin.y)
        }
    }
}

/// Any solid tile in column `x` between rows `min_y..=max_y`
#[inline]
fn column_blocked(grid: &Grid, x: i32, min_y: i32, max_y: i32) -> bool {
    (min_y..=max_y).any(|y| grid.is_solid(x, y))
}

/// Any solid tile in row `y` between columns `min_x..=max_x`
#[inline]
fn row_blocked(grid: &Grid, y: i32, min_x: i32, max_x: i32) -> bool {
    (min_x..=max_x).any(|x| grid.is_solid(x, y))
}
