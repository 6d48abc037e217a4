//! Movement orders.

use serde::{Deserialize, Serialize};

use super::location::{Direction, Location};

/// An order for the strength on one cell: where to send it this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub location: Location,
    pub direction: Direction,
}

impl Move {
    /// Creates a move.
    pub const fn new(location: Location, direction: Direction) -> Self {
        Self {
            location,
            direction,
        }
    }

    /// Returns true if the order leaves the strength where it is.
    pub fn is_hold(&self) -> bool {
        self.direction == Direction::Hold
    }
}
