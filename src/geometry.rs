//! Grid geometry
//!
//! Integer coordinates and the four cardinal directions shared by the maze,
//! the routes and the walkers. Pure value types, no state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four cardinal directions, indexed 0..=3 in East/North/West/South order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

impl Direction {
    /// All directions, in index order.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// Fixed integer index (0=East, 1=North, 2=West, 3=South). This is also
    /// the code used by the route text format.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Direction> {
        Self::ALL.get(index).copied()
    }

    /// Unit offset `(dx, dy)`. East/West run along y and North/South along x,
    /// matching the maze file convention (first file dimension = x/width).
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (0, 1),
            Direction::North => (-1, 0),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
        }
    }

    /// The reverse direction: `index + 2 mod 4`.
    #[inline]
    pub fn opposite(self) -> Direction {
        Self::ALL[(self.index() + 2) % 4]
    }
}

/// An immutable 2D grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// The coordinate one step away in `dir`.
    #[inline]
    pub fn add_direction(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Coordinate::new(self.x + dx, self.y + dy)
    }

    /// The coordinate one step back against `dir` (undoes `add_direction`).
    #[inline]
    pub fn subtract_direction(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Coordinate::new(self.x - dx, self.y - dy)
    }

    /// Bounds test against a width x length extent anchored at the origin.
    #[inline]
    pub fn within(self, width: usize, length: usize) -> bool {
        self.x >= 0 && (self.x as usize) < width && self.y >= 0 && (self.y as usize) < length
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
