//! Location evaluation.
//!
//! Scores candidate target cells for a player, combining distance, nearby
//! enemies, production value, and a smoothed neighbourhood term.

pub mod heuristic;
pub mod weights;

pub use heuristic::{normalized_site_score, simple_score, ScoreBreakdown, Scorer};
pub use weights::ScoringWeights;
