// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Positions, the direction pointer and the codel chooser.

use std::fmt;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// Coordinates of one codel. `x` grows rightwards, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one step in `direction`, or `None` if that
    /// would leave the non-negative quadrant. Upper bounds are the grid's
    /// business.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Position { x, y })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// The direction pointer (DP). Discriminants follow clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCountMacro)]
#[repr(u8)]
pub enum Direction {
    #[default]
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    const CLOCKWISE: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Index in clockwise order starting from `Right`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotate clockwise `steps` times; negative values rotate anticlockwise.
    ///
    /// ```
    /// use piet_interp::geometry::Direction;
    ///
    /// assert_eq!(Direction::Right.rotate(1), Direction::Down);
    /// assert_eq!(Direction::Right.rotate(-1), Direction::Up);
    /// assert_eq!(Direction::Left.rotate(6), Direction::Right);
    /// ```
    pub fn rotate(self, steps: i64) -> Direction {
        let offset = steps.rem_euclid(4) as usize;
        Self::CLOCKWISE[(self.index() + offset) % 4]
    }

    /// Unit vector in screen coordinates.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }
}

/// The codel chooser (CC), relative to the direction pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCountMacro)]
#[repr(u8)]
pub enum Chooser {
    #[default]
    Left,
    Right,
}

impl Chooser {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn toggle(self) -> Chooser {
        match self {
            Chooser::Left => Chooser::Right,
            Chooser::Right => Chooser::Left,
        }
    }

    /// The absolute direction this chooser points to when facing `dp`:
    /// left is a quarter turn anticlockwise, right a quarter turn clockwise.
    pub fn absolute(self, dp: Direction) -> Direction {
        match self {
            Chooser::Left => dp.rotate(-1),
            Chooser::Right => dp.rotate(1),
        }
    }
}
