//! Board coordinates and edge directions.
//!
//! Coordinates are signed so that callers can hand in whatever a pointer
//! position maps to (including `-1` for "off the board") and get a clean
//! bounds error back instead of an integer overflow.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cell position on the board. `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check whether this coordinate lies on a `size` x `size` board.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < size && (self.y as usize) < size
    }

    /// Row-major cell index, or `None` when off the board.
    #[must_use]
    pub fn index(self, size: usize) -> Option<usize> {
        if self.in_bounds(size) {
            Some(self.y as usize * size + self.x as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            x: (index % size) as i32,
            y: (index / size) as i32,
        }
    }

    /// The cell one step away in `dir`. May be off the board.
    ///
    /// Wraps at the `i32` limits; a wrapped cell is always off the board.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Edge-adjacent cells that lie on the board, paired with the direction
    /// taken to reach them. Diagonals are never neighbours.
    #[must_use]
    pub fn neighbours(self, size: usize) -> SmallVec<[(Direction, Coord); 4]> {
        Direction::ALL
            .iter()
            .map(|&dir| (dir, self.step(dir)))
            .filter(|(_, c)| c.in_bounds(size))
            .collect()
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four edges of a cell, in clockwise order starting at the top.
///
/// The discriminant doubles as the edge slot in a tile's edge array, so
/// rotating by `r` quarter turns is plain modular arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Slot index in a `[_; 4]` edge array.
    #[must_use]
    pub const fn slot(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_slot(slot: usize) -> Self {
        Self::ALL[slot % 4]
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_slot(self.slot() + 2)
    }

    /// Screen-style offset: y grows downwards.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}
