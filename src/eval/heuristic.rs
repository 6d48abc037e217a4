//! Heuristic location scoring.
//!
//! Scores a candidate target cell by combining four features: how close it
//! is, how many enemy cells border it, how cheap its production is to take,
//! and how attractive its surroundings are.
//!
//! The neighbourhood feature looks one level deep. It is computed with
//! `simple_score`, which only reads the site itself, so the full scorer never
//! recurses into itself.

use crate::board::{neighbors, overkill_count, Direction, Grid, Location, PlayerId, Site, CARDINALS};

use super::weights::ScoringWeights;

/// Unweighted feature values of one location score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub distance: f64,
    pub attack: f64,
    pub site: f64,
    pub neighbor: f64,
}

impl ScoreBreakdown {
    /// Combines the features into a single score.
    pub fn total(&self, w: &ScoringWeights) -> f64 {
        self.distance * w.distance
            + self.attack * w.attack
            + self.site * w.site
            + self.neighbor * w.neighbor
    }
}

/// Production per unit of strength needed to take the site, scaled so the
/// reference ceiling maps to 1.
///
/// Not clamped: a site above the ceiling keeps ranking above cheaper ones.
#[inline]
pub fn normalized_site_score(site: Site, w: &ScoringWeights) -> f64 {
    let ratio = f64::from(site.production) / (f64::from(site.strength) + 1.0);
    ratio / w.site_ceiling
}

/// Depth-limited score of a site seen as a neighbour of a target.
///
/// Only the site term contributes; distance, attack, and neighbourhood are
/// zero at this depth.
#[inline]
pub fn simple_score(site: Site, w: &ScoringWeights) -> f64 {
    normalized_site_score(site, w) * w.site
}

/// Scores candidate targets for one player on one grid snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    grid: &'a Grid,
    me: PlayerId,
    weights: &'a ScoringWeights,
}

impl<'a> Scorer<'a> {
    pub fn new(grid: &'a Grid, me: PlayerId, weights: &'a ScoringWeights) -> Self {
        Self { grid, me, weights }
    }

    /// Feature values for treating `loc` (holding `site`) as a target
    /// `distance` steps away.
    pub fn breakdown(&self, loc: Location, site: Site, distance: usize) -> ScoreBreakdown {
        let map_size = self.grid.map_size() as f64;
        ScoreBreakdown {
            distance: map_size - distance as f64,
            attack: overkill_count(loc, self.me, self.grid) as f64,
            site: normalized_site_score(site, self.weights),
            neighbor: self.neighbor_score(loc),
        }
    }

    /// Composite desirability of `loc` as a movement target.
    pub fn score_location(&self, loc: Location, site: Site, distance: usize) -> f64 {
        self.breakdown(loc, site, distance).total(self.weights)
    }

    /// Mean simple score of the four neighbours of `loc`, damped by the
    /// neighbour divisor.
    pub fn neighbor_score(&self, loc: Location) -> f64 {
        let n = neighbors(loc, self.grid);
        let sum: f64 = n.iter().map(|(_, s)| simple_score(*s, self.weights)).sum();
        sum / n.len() as f64 / self.weights.neighbor_divisor
    }

    /// The first cell not owned by us when walking from `loc` in `direction`,
    /// with the number of steps taken. `None` if the walk stays inside our
    /// territory for the whole map size.
    pub fn nearest_border(&self, loc: Location, direction: Direction) -> Option<(usize, Location)> {
        (1..self.grid.map_size())
            .map(|radius| (radius, self.grid.neighbor_location(loc, direction, radius)))
            .find(|(_, target)| !self.grid.site(*target).is_owned_by(self.me))
    }

    /// The cardinal direction whose nearest border cell scores highest.
    ///
    /// Directions are scanned North, East, South, West and the earliest wins a
    /// tie. Returns `Hold` when no direction leaves our territory.
    pub fn preferred_direction(&self, loc: Location) -> Direction {
        let mut best: Option<(Direction, f64)> = None;

        for direction in CARDINALS {
            let Some((radius, target)) = self.nearest_border(loc, direction) else {
                continue;
            };
            let score = self.score_location(target, self.grid.site(target), radius);
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((direction, score));
            }
        }

        best.map_or(Direction::Hold, |(d, _)| d)
    }
}
