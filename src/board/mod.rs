//! Board representation.
//!
//! Contains the toroidal grid snapshot, cell state, coordinates, directions,
//! neighbourhood queries, and the move type emitted by the engine.

pub mod adjacency;
pub mod grid;
pub mod location;
pub mod order;
pub mod site;

pub use adjacency::{
    can_attack, neighbors, overkill_count, overkill_targets, owned_neighbor_count,
    NEIGHBOR_ORDER,
};
pub use grid::{Grid, GridError};
pub use location::{Direction, Location, CARDINALS};
pub use order::Move;
pub use site::{PlayerId, Site, UNCLAIMED};
