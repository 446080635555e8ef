//! Directions of travel and blocked-direction flag sets

bitflags::bitflags! {
    /// Directions in which the most recent move ran into a wall
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Direction: u8 {
        const UP = 0b0001;
        const RIGHT = 0b0010;
        const DOWN = 0b0100;
        const LEFT = 0b1000;
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::empty()
    }
}

impl Direction {
    /// Blocked on the x axis (left or right)
    #[inline]
    pub fn horizontal(self) -> bool {
        self.intersects(Direction::LEFT | Direction::RIGHT)
    }

    /// Blocked on the y axis (up or down)
    #[inline]
    pub fn vertical(self) -> bool {
        self.intersects(Direction::UP | Direction::DOWN)
    }
}

/// A single direction of travel along one axis.
///
/// World space is y-down: `Down` increases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    /// The flag reported when travel in this heading is blocked
    pub fn flag(self) -> Direction {
        match self {
            Heading::Up => Direction::UP,
            Heading::Right => Direction::RIGHT,
            Heading::Down => Direction::DOWN,
            Heading::Left => Direction::LEFT,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Right => Heading::Left,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
        }
    }

    /// Quarter turn clockwise (screen space)
    pub fn clockwise(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }
}
