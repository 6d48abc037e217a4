//! Tunable weights of the location scorer.

use serde::{Deserialize, Serialize};

/// Weights and normalisers of the composite location score.
///
/// The defaults are empirical. The distance term spans the whole map size
/// while the other terms stay within a few points, so in practice distance
/// ranks targets and the rest separates targets at equal distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight of `map_size - distance`.
    pub distance: f64,
    /// Weight per enemy cell bordering the target.
    pub attack: f64,
    /// Weight of the normalised production/strength ratio.
    pub site: f64,
    /// Weight of the smoothed neighbourhood term.
    pub neighbor: f64,
    /// Production/strength ratio that maps to a normalised site score of 1.
    pub site_ceiling: f64,
    /// Divisor applied to the mean neighbour score.
    pub neighbor_divisor: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            distance: 1.0,
            attack: 0.1,
            site: 2.0,
            neighbor: 0.9,
            site_ceiling: 17.0,
            neighbor_divisor: 8.0,
        }
    }
}
