//! Neighbourhood queries around a cell.
//!
//! Neighbours are always reported in the fixed order North, West, East,
//! South. Decision code breaks exact score ties by this order, so it must not
//! change.

use super::grid::Grid;
use super::location::{Direction, Location};
use super::site::{PlayerId, Site};

/// Order in which the four neighbours of a cell are reported.
pub const NEIGHBOR_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::East,
    Direction::South,
];

/// The four adjacent sites of `loc`, each paired with the direction that
/// reaches it.
#[inline]
pub fn neighbors(loc: Location, grid: &Grid) -> [(Direction, Site); 4] {
    NEIGHBOR_ORDER.map(|d| (d, grid.site_at(loc, d, 1)))
}

/// Neighbours of `loc` held by a player other than `me`.
pub fn overkill_targets(
    loc: Location,
    me: PlayerId,
    grid: &Grid,
) -> impl Iterator<Item = (Direction, Site)> {
    neighbors(loc, grid)
        .into_iter()
        .filter(move |(_, site)| site.is_enemy_of(me))
}

/// Number of enemy cells bordering `loc`.
#[inline]
pub fn overkill_count(loc: Location, me: PlayerId, grid: &Grid) -> usize {
    overkill_targets(loc, me, grid).count()
}

/// Returns true if stepping from `loc` into any neighbour would leave the
/// mover bordering at least one enemy cell.
pub fn can_attack(loc: Location, me: PlayerId, grid: &Grid) -> bool {
    NEIGHBOR_ORDER
        .iter()
        .any(|&d| overkill_count(grid.neighbor_location(loc, d, 1), me, grid) > 0)
}

/// Number of neighbours of `loc` owned by `me`.
#[inline]
pub fn owned_neighbor_count(loc: Location, me: PlayerId, grid: &Grid) -> usize {
    neighbors(loc, grid)
        .iter()
        .filter(|(_, site)| site.is_owned_by(me))
        .count()
}
