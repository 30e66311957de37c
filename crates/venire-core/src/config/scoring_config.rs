use serde::{Deserialize, Serialize};

use crate::constants;

/// Scorer configuration shared by the signal-based and Bayesian methods,
/// plus the embedding confidence curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Logistic gain applied to the summed signal contributions.
    pub squash_gain: f64,
    /// Exponent gain turning (weight x agreement) into a likelihood ratio.
    pub likelihood_gain: f64,
    /// Relative tolerance for numeric expected-value agreement.
    pub numeric_tolerance: f64,
    /// Agreement assigned to a numeric fact outside tolerance.
    pub numeric_mismatch_agreement: f64,
    /// Agreement assigned to a categorical fact differing from expectation.
    pub categorical_mismatch_agreement: f64,
    /// Character count at which embedding confidence reaches one half.
    pub text_saturation_chars: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            squash_gain: constants::DEFAULT_SQUASH_GAIN,
            likelihood_gain: constants::DEFAULT_LIKELIHOOD_GAIN,
            numeric_tolerance: constants::DEFAULT_NUMERIC_TOLERANCE,
            numeric_mismatch_agreement: constants::NUMERIC_MISMATCH_AGREEMENT,
            categorical_mismatch_agreement: constants::CATEGORICAL_MISMATCH_AGREEMENT,
            text_saturation_chars: constants::DEFAULT_TEXT_SATURATION_CHARS,
        }
    }
}
