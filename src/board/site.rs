//! Per-cell state.

use serde::{Deserialize, Serialize};

/// Identifies a player. `UNCLAIMED` marks territory nobody holds.
pub type PlayerId = u8;

/// Owner value of cells that belong to no player.
pub const UNCLAIMED: PlayerId = 0;

/// The state of a single grid cell for one turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Site {
    pub owner: PlayerId,
    pub strength: u16,
    pub production: u16,
}

impl Site {
    /// Creates a site.
    pub const fn new(owner: PlayerId, strength: u16, production: u16) -> Self {
        Self {
            owner,
            strength,
            production,
        }
    }

    /// Returns true if the site belongs to `player`.
    #[inline]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == player
    }

    /// Returns true if the site is held by a player other than `player`.
    /// Unclaimed territory is not an enemy.
    #[inline]
    pub fn is_enemy_of(&self, player: PlayerId) -> bool {
        self.owner != UNCLAIMED && self.owner != player
    }
}
