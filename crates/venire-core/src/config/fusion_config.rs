use serde::{Deserialize, Serialize};

use crate::constants;

/// Fusion, ranking, and ledger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Minimum |delta| in fused probability that produces a ledger record.
    pub materiality_threshold: f64,
    /// Fused probability above which a persona becomes the juror's
    /// primary match candidate.
    pub confirmation_threshold: f64,
    /// Ranked matches surfaced per juror.
    pub top_n: usize,
    /// Supporting/contradicting signals named in rationale text.
    pub rationale_signals: usize,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            materiality_threshold: constants::DEFAULT_MATERIALITY_THRESHOLD,
            confirmation_threshold: constants::DEFAULT_CONFIRMATION_THRESHOLD,
            top_n: constants::DEFAULT_TOP_N,
            rationale_signals: constants::DEFAULT_RATIONALE_SIGNALS,
        }
    }
}
