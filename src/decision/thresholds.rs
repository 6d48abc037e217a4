//! Strength thresholds used by the per-cell decision rules.

use serde::{Deserialize, Serialize};

/// Empirical thresholds of the decision rules.
///
/// None of these values is derived; they are tuned defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Cells at or below this strength never expand or press a multi-front
    /// attack.
    pub min_active_strength: u16,
    /// An interior cell moves once its strength exceeds
    /// `min(production * overflow_production_factor, overflow_cap)`.
    pub overflow_production_factor: u16,
    pub overflow_cap: u16,
    /// Reinforcing an ally is skipped when the combined strength would reach
    /// this cap.
    pub reinforce_cap: u32,
    /// Each enemy bordering an attacked cell adds `production / divisor` on
    /// top of its base value of 1.
    pub attack_production_divisor: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_active_strength: 10,
            overflow_production_factor: 2,
            overflow_cap: 127,
            reinforce_cap: 270,
            attack_production_divisor: 170.0,
        }
    }
}

impl Thresholds {
    /// Strength an interior cell must exceed before it leaves to expand.
    pub fn overflow_limit(&self, production: u16) -> u32 {
        let scaled = u32::from(production) * u32::from(self.overflow_production_factor);
        scaled.min(u32::from(self.overflow_cap))
    }
}
