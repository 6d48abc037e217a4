//! Move decisions.
//!
//! Turns a grid snapshot into one order per owned cell using the heuristics
//! in `eval` and the thresholds in `Thresholds`.

pub mod cell;
pub mod thresholds;
pub mod turn;

pub use cell::{Decision, Planner};
pub use thresholds::Thresholds;
pub use turn::{plan_turn, plan_turn_parallel, DecisionTally, TurnPlan};
