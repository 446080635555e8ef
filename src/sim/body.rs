//! Movable bodies and per-axis move resolution

use glam::Vec2;

use super::collision::sweep;
use super::direction::{Direction, Heading};
use super::grid::Grid;

/// An axis-aligned box moving through the grid.
///
/// `pos` is the top-left corner in tile units; the box covers
/// `pos..pos + size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        assert!(
            size.x > 0.0 && size.y > 0.0,
            "body size must be positive: {size}"
        );
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Move by the current velocity, stopping at walls.
    ///
    /// The x axis is resolved and applied first, then y is swept from the
    /// updated position. Returns the directions that were blocked.
    pub fn move_through(&mut self, grid: &Grid) -> Direction {
        let mut hits = Direction::empty();
        let movement = self.vel;

        if movement.x > 0.0 {
            // Sweep the strip just right of the box
            let origin = Vec2::new(self.pos.x + self.size.x, self.pos.y);
            let extent = Vec2::new(movement.x, self.size.y);
            let result = sweep(grid, origin, extent, Heading::Right);
            if result.blocked {
                hits |= Direction::RIGHT;
            }
            self.pos.x = result.limit - self.size.x;
        } else if movement.x < 0.0 {
            let origin = Vec2::new(self.pos.x + movement.x, self.pos.y);
            let extent = Vec2::new(-movement.x, self.size.y);
            let result = sweep(grid, origin, extent, Heading::Left);
            if result.blocked {
                hits |= Direction::LEFT;
            }
            self.pos.x = result.limit;
        }

        if movement.y > 0.0 {
            let origin = Vec2::new(self.pos.x, self.pos.y + self.size.y);
            let extent = Vec2::new(self.size.x, movement.y);
            let result = sweep(grid, origin, extent, Heading::Down);
            if result.blocked {
                hits |= Direction::DOWN;
            }
            self.pos.y = result.limit - self.size.y;
        } else if movement.y < 0.0 {
            let origin = Vec2::new(self.pos.x, self.pos.y + movement.y);
            let extent = Vec2::new(self.size.x, -movement.y);
            let result = sweep(grid, origin, extent, Heading::Up);
            if result.blocked {
                hits |= Direction::UP;
            }
            self.pos.y = result.limit;
        }

        hits
    }

    /// True if any tile under the box is solid
    pub fn overlaps_solid(&self, grid: &Grid) -> bool {
        let (min, max) = super::collision::covered_tiles(self.pos, self.size);
        (min.y..=max.y).any(|y| (min.x..=max.x).any(|x| grid.is_solid(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Grid {
        Grid::bordered(12, 12)
    }

    #[test]
    fn test_moves_freely_in_open_space() {
        let grid = room();
        let mut body = Body::new(Vec2::new(4.0, 4.0), Vec2::ONE);
        body.vel = Vec2::new(0.25, -0.5);
        let hits = body.move_through(&grid);
        assert!(hits.is_empty());
        assert_eq!(body.pos, Vec2::new(4.25, 3.5));
    }

    #[test]
    fn test_right_edge_clamped_to_wall() {
        let mut rows = vec!["............"; 12];
        rows[5] = "........#...";
        let grid = Grid::from_ascii(&rows);
        let mut body = Body::new(Vec2::new(5.0, 5.0), Vec2::ONE);
        body.vel = Vec2::new(2.0, 0.0);

        let hits = body.move_through(&grid);
        assert_eq!(hits, Direction::RIGHT);
        assert_eq!(body.pos.x, 7.0);
    }

    #[test]
    fn test_left_edge_clamped_to_wall() {
        let grid = room();
        let mut body = Body::new(Vec2::new(1.5, 3.0), Vec2::ONE);
        body.vel = Vec2::new(-0.75, 0.0);
        assert_eq!(body.move_through(&grid), Direction::LEFT);
        assert_eq!(body.pos.x, 1.0);
    }

    #[test]
    fn test_floor_and_ceiling() {
        let grid = room();
        let mut body = Body::new(Vec2::new(3.0, 10.5), Vec2::ONE);
        body.vel = Vec2::new(0.0, 0.8);
        assert_eq!(body.move_through(&grid), Direction::DOWN);
        assert_eq!(body.pos.y, 10.0);

        let mut body = Body::new(Vec2::new(3.0, 1.25), Vec2::ONE);
        body.vel = Vec2::new(0.0, -0.5);
        assert_eq!(body.move_through(&grid), Direction::UP);
        assert_eq!(body.pos.y, 1.0);
    }

    #[test]
    fn test_horizontal_resolves_before_vertical() {
        // Moving diagonally into a corner: x hits the wall first, then y is
        // swept from the clamped x and slides down the wall
        let grid = Grid::from_ascii(&["#####", "#...#", "#...#", "#...#", "#####"]);
        let mut body = Body::new(Vec2::new(3.0, 1.5), Vec2::ONE);
        body.vel = Vec2::new(0.5, 0.5);
        let hits = body.move_through(&grid);
        assert_eq!(hits, Direction::RIGHT);
        assert_eq!(body.pos, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_vertical_sweep_uses_updated_x() {
        // A ledge below the start column but not below the destination:
        // moving x first lets the body drop past it
        let grid = Grid::from_ascii(&["......", "......", ".#....", "......"]);
        let mut body = Body::new(Vec2::new(1.0, 1.0), Vec2::ONE);
        body.vel = Vec2::new(1.0, 1.0);
        let hits = body.move_through(&grid);
        assert!(hits.is_empty());
        assert_eq!(body.pos, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_overlap_detection() {
        let grid = room();
        assert!(!Body::new(Vec2::new(1.0, 1.0), Vec2::ONE).overlaps_solid(&grid));
        assert!(Body::new(Vec2::new(0.5, 1.0), Vec2::ONE).overlaps_solid(&grid));
        assert!(!Body::new(Vec2::new(10.0, 10.0), Vec2::ONE).overlaps_solid(&grid));
        assert!(Body::new(Vec2::new(10.5, 10.0), Vec2::ONE).overlaps_solid(&grid));
    }
}
