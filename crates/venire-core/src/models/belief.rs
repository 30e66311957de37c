//! Snapshot of the Bayesian updater's posterior, exposed for audit.

use serde::{Deserialize, Serialize};

/// The posterior distribution over the active persona set after
/// incorporating observed evidence. Sums to 1 within floating-point
/// tolerance at all times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeliefSnapshot {
    /// (persona id, posterior probability), in stable persona-id order.
    pub posterior: Vec<(String, f64)>,
    /// 1 - normalized entropy: how peaked the distribution is. Low after
    /// much evidence signals weak discriminating power, not missing data.
    pub confidence: f64,
    /// Facts incorporated so far (latest per signal).
    pub facts_processed: usize,
}

impl BeliefSnapshot {
    /// Posterior probability for one persona, when present.
    pub fn probability(&self, persona_id: &str) -> Option<f64> {
        self.posterior
            .iter()
            .find(|(id, _)| id == persona_id)
            .map(|(_, p)| *p)
    }

    /// Total probability mass (1 within tolerance, by construction).
    pub fn total_mass(&self) -> f64 {
        self.posterior.iter().map(|(_, p)| p).sum()
    }
}
