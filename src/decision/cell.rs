//! Per-cell move decisions.
//!
//! Every owned cell is judged on its own against the read-only grid. The
//! rules are tried in priority order:
//!
//! 1. Interior cells (no foreign neighbour) idle until they overflow, then
//!    head for the most attractive border.
//! 2. Frontier cells take a neighbour they are strictly stronger than.
//! 3. Failing that, strong cells near enemies press toward the spot that
//!    borders the most enemy cells.
//! 4. Failing that, cells hand their strength to a richer frontier ally that
//!    could then win a fight it cannot win alone.
//! 5. Otherwise the cell holds.

use crate::board::{
    can_attack, neighbors, overkill_count, overkill_targets, owned_neighbor_count, Direction,
    Grid, Location, Move, PlayerId, Site, NEIGHBOR_ORDER,
};
use crate::eval::{Scorer, ScoringWeights};

use super::thresholds::Thresholds;

/// Outcome of the decision rules for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Hold,
    /// Interior overflow heading for the border.
    Expand(Direction),
    /// Take a weaker neighbour.
    Attack(Direction),
    /// Multi-front push without a guaranteed win.
    Pressure(Direction),
    /// Merge into a frontier ally.
    Reinforce(Direction),
}

impl Decision {
    /// The direction this decision moves in.
    pub fn direction(self) -> Direction {
        match self {
            Decision::Hold => Direction::Hold,
            Decision::Expand(d)
            | Decision::Attack(d)
            | Decision::Pressure(d)
            | Decision::Reinforce(d) => d,
        }
    }

    /// The order to emit for `location`, or `None` when the cell stays put.
    pub fn to_move(self, location: Location) -> Option<Move> {
        match self.direction() {
            Direction::Hold => None,
            direction => Some(Move::new(location, direction)),
        }
    }
}

/// Returns the first item with the highest score. Later items must score
/// strictly higher to win.
fn first_max<T>(items: impl IntoIterator<Item = (T, f64)>) -> Option<T> {
    let mut best: Option<(T, f64)> = None;
    for (item, score) in items {
        if best.as_ref().map_or(true, |(_, b)| score > *b) {
            best = Some((item, score));
        }
    }
    best.map(|(item, _)| item)
}

/// Production per unit of defending strength. Undefended cells with any
/// production rank above everything else.
fn production_ratio(site: Site) -> f64 {
    match (site.production, site.strength) {
        (0, _) => 0.0,
        (_, 0) => f64::INFINITY,
        (p, s) => f64::from(p) / f64::from(s),
    }
}

/// Applies the decision rules for one player on one grid snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    grid: &'a Grid,
    me: PlayerId,
    weights: &'a ScoringWeights,
    thresholds: &'a Thresholds,
}

impl<'a> Planner<'a> {
    pub fn new(
        grid: &'a Grid,
        me: PlayerId,
        weights: &'a ScoringWeights,
        thresholds: &'a Thresholds,
    ) -> Self {
        Self {
            grid,
            me,
            weights,
            thresholds,
        }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn player(&self) -> PlayerId {
        self.me
    }

    /// Decides what the cell at `loc` does this turn. Cells we do not own
    /// always hold.
    pub fn decide(&self, loc: Location) -> Decision {
        let site = self.grid.site(loc);
        if !site.is_owned_by(self.me) {
            return Decision::Hold;
        }

        let around = neighbors(loc, self.grid);
        let contested: Vec<(Direction, Site)> = around
            .iter()
            .copied()
            .filter(|(_, s)| !s.is_owned_by(self.me))
            .collect();

        if contested.is_empty() {
            return self.interior(loc, site);
        }

        let attack_possible = can_attack(loc, self.me, self.grid);

        if let Some(direction) = self.weakest_target(loc, site, &contested, attack_possible) {
            return Decision::Attack(direction);
        }

        if attack_possible && site.strength > self.thresholds.min_active_strength {
            if let Some(direction) = self.pressure_direction(loc) {
                return Decision::Pressure(direction);
            }
        }

        if site.strength > 0 {
            if let Some(direction) = self.reinforce_target(loc, site, &around) {
                return Decision::Reinforce(direction);
            }
        }

        Decision::Hold
    }

    /// Rule 1: interior cells keep growing until they overflow.
    fn interior(&self, loc: Location, site: Site) -> Decision {
        let strength = u32::from(site.strength);
        let overflowing = site.strength > self.thresholds.min_active_strength
            && strength > self.thresholds.overflow_limit(site.production);
        if !overflowing {
            return Decision::Hold;
        }
        match Scorer::new(self.grid, self.me, self.weights).preferred_direction(loc) {
            Direction::Hold => Decision::Hold,
            direction => Decision::Expand(direction),
        }
    }

    /// Rule 2: the best contested neighbour weaker than this cell.
    ///
    /// Near enemies, neighbours are ranked by the enemy cells they border,
    /// each counting one plus a small production bonus. Otherwise they are
    /// ranked by production per defending strength.
    fn weakest_target(
        &self,
        loc: Location,
        site: Site,
        contested: &[(Direction, Site)],
        attack_possible: bool,
    ) -> Option<Direction> {
        let divisor = self.thresholds.attack_production_divisor;
        first_max(
            contested
                .iter()
                .filter(|(_, n)| n.strength < site.strength)
                .map(|&(d, n)| {
                    let score = if attack_possible {
                        let from = self.grid.neighbor_location(loc, d, 1);
                        overkill_targets(from, self.me, self.grid)
                            .map(|(_, t)| 1.0 + f64::from(t.production) / divisor)
                            .sum::<f64>()
                    } else {
                        production_ratio(n)
                    };
                    (d, score)
                }),
        )
    }

    /// Rule 3: the neighbouring position bordering the most enemy cells.
    fn pressure_direction(&self, loc: Location) -> Option<Direction> {
        first_max(NEIGHBOR_ORDER.iter().map(|&d| {
            let from = self.grid.neighbor_location(loc, d, 1);
            (d, overkill_count(from, self.me, self.grid) as f64)
        }))
    }

    /// Rule 4: the most productive frontier ally worth reinforcing.
    fn reinforce_target(
        &self,
        loc: Location,
        site: Site,
        around: &[(Direction, Site)],
    ) -> Option<Direction> {
        first_max(
            around
                .iter()
                .filter(|(_, ally)| {
                    ally.is_owned_by(self.me)
                        && ally.strength > 0
                        && ally.production > site.production
                })
                .filter(|&&(d, ally)| self.worth_reinforcing(loc, d, ally, site))
                .map(|&(d, ally)| (d, f64::from(ally.production))),
        )
    }

    /// An ally is worth reinforcing when it sits on the frontier, cannot win
    /// any adjacent fight alone, would win one with our strength added, and
    /// the merge stays under the reinforcement cap.
    fn worth_reinforcing(&self, loc: Location, d: Direction, ally: Site, helper: Site) -> bool {
        let ally_loc = self.grid.neighbor_location(loc, d, 1);
        if owned_neighbor_count(ally_loc, self.me, self.grid) >= 4 {
            return false;
        }

        let alone = u32::from(ally.strength) + u32::from(ally.production);
        let helped = alone + u32::from(helper.strength);
        let foreign: Vec<u32> = neighbors(ally_loc, self.grid)
            .iter()
            .filter(|(_, s)| !s.is_owned_by(self.me))
            .map(|(_, s)| u32::from(s.strength))
            .collect();

        let needs_help = foreign.iter().all(|&s| s >= alone);
        let wins_with_help = foreign.iter().any(|&s| s < helped);
        let under_cap =
            u32::from(ally.strength) + u32::from(helper.strength) < self.thresholds.reinforce_cap;

        needs_help && wins_with_help && under_cap
    }
}
