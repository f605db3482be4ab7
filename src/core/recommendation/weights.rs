//! Factor weights and the battle-zone shift near the passing line

use serde::{Deserialize, Serialize};

/// Points either side of the passing grade where weight starts shifting
pub const BATTLE_ZONE: f64 = 15.0;

/// Largest share of weight moved from academics at the passing line itself
pub const MAX_SHIFT: f64 = 0.15;

/// Weights applied to each factor; they always sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Academic standing
    pub academic: f64,
    /// Required vs. elective
    pub importance: f64,
    /// Stress
    pub stress: f64,
    /// Workload
    pub workload: f64,
}

impl Weights {
    /// Weights used outside the battle zone
    pub const BASE: Self = Self {
        academic: 0.60,
        importance: 0.20,
        stress: 0.10,
        workload: 0.10,
    };
}

impl Default for Weights {
    fn default() -> Self {
        Self::BASE
    }
}

/// Weights for a grade `distance` points away from the passing grade.
///
/// Inside the battle zone, `0.15 × (1 − distance/15)` moves from academics to
/// stress and workload in equal halves. Importance never changes.
#[must_use]
pub fn compute_weights(distance: f64) -> Weights {
    let mut weights = Weights::BASE;
    if distance < BATTLE_ZONE {
        let influence = 1.0 - distance / BATTLE_ZONE;
        let shift = MAX_SHIFT * influence;
        weights.academic -= shift;
        weights.stress += shift / 2.0;
        weights.workload += shift / 2.0;
    }
    weights
}
