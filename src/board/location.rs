//! Locations and movement directions.
//!
//! A `Location` is a plain (x, y) cell coordinate. It carries no knowledge of
//! the grid it belongs to; wrapping is done by `Grid`.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub x: usize,
    pub y: usize,
}

impl Location {
    /// Creates a location from its coordinates.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A movement direction, including the "stay in place" order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Hold = 0,
    North = 1,
    East = 2,
    South = 3,
    West = 4,
}

/// The four cardinal directions in scan order.
pub const CARDINALS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// Returns the numeric code used on the wire.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parses a direction from its wire code.
    pub fn from_code(code: u8) -> Option<Direction> {
        match code {
            0 => Some(Direction::Hold),
            1 => Some(Direction::North),
            2 => Some(Direction::East),
            3 => Some(Direction::South),
            4 => Some(Direction::West),
            _ => None,
        }
    }

    /// Returns the direction pointing the other way. `Hold` is its own opposite.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Hold => Direction::Hold,
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Returns the unit (dx, dy) step. North decreases y.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Hold => (0, 0),
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}
