//! Whole-turn planning.
//!
//! Scans the grid in row-major order and collects one decision per owned
//! cell. Cells are independent of each other, so the scan can also run on
//! the rayon pool; both paths produce the same moves in the same order.

use rayon::prelude::*;

use crate::board::{Location, Move};

use super::cell::{Decision, Planner};

/// How many owned cells ended up in each decision branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionTally {
    pub hold: usize,
    pub expand: usize,
    pub attack: usize,
    pub pressure: usize,
    pub reinforce: usize,
}

impl DecisionTally {
    fn record(&mut self, decision: Decision) {
        match decision {
            Decision::Hold => self.hold += 1,
            Decision::Expand(_) => self.expand += 1,
            Decision::Attack(_) => self.attack += 1,
            Decision::Pressure(_) => self.pressure += 1,
            Decision::Reinforce(_) => self.reinforce += 1,
        }
    }

    /// Total number of owned cells decided.
    pub fn total(&self) -> usize {
        self.hold + self.expand + self.attack + self.pressure + self.reinforce
    }
}

/// The decisions for every owned cell of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnPlan {
    /// Owned cells in row-major order with their decision.
    pub decisions: Vec<(Location, Decision)>,
}

impl TurnPlan {
    /// The orders to send, holds omitted.
    pub fn moves(&self) -> Vec<Move> {
        self.decisions
            .iter()
            .filter_map(|&(loc, decision)| decision.to_move(loc))
            .collect()
    }

    pub fn tally(&self) -> DecisionTally {
        let mut tally = DecisionTally::default();
        for &(_, decision) in &self.decisions {
            tally.record(decision);
        }
        tally
    }
}

/// Decides every owned cell one after another.
pub fn plan_turn(planner: &Planner<'_>) -> TurnPlan {
    let grid = planner.grid();
    let me = planner.player();
    let decisions = grid
        .locations()
        .filter(|&loc| grid.site(loc).is_owned_by(me))
        .map(|loc| (loc, planner.decide(loc)))
        .collect();
    TurnPlan { decisions }
}

/// Decides every owned cell on the rayon thread pool.
pub fn plan_turn_parallel(planner: &Planner<'_>) -> TurnPlan {
    let grid = planner.grid();
    let me = planner.player();
    let decisions = grid
        .sites()
        .par_iter()
        .enumerate()
        .filter(|(_, site)| site.is_owned_by(me))
        .map(|(i, _)| {
            let loc = grid.location_of(i);
            (loc, planner.decide(loc))
        })
        .collect();
    TurnPlan { decisions }
}
