//! Per-method score and the named signal contributions behind it.

use serde::{Deserialize, Serialize};

use crate::catalog::SignalValue;
use crate::constants::NEUTRAL_SCORE;

/// One of the three independent scoring methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    SignalBased,
    Embedding,
    Bayesian,
}

impl MatchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignalBased => "signal_based",
            Self::Embedding => "embedding",
            Self::Bayesian => "bayesian",
        }
    }
}

/// Score and confidence one method produced for a (juror, persona) pair.
/// Ephemeral — recomputed on demand, persisted only via the ledger's deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodScore {
    pub method: MatchMethod,
    /// Score in [0, 1]; 0.5 is the uninformative midpoint.
    pub score: f64,
    /// How much this method's score should count in fusion, in [0, 1].
    pub confidence: f64,
}

impl MethodScore {
    pub fn new(method: MatchMethod, score: f64, confidence: f64) -> Self {
        Self {
            method,
            score: score.clamp(0.0, 1.0),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// The explicit "no usable input" state: neutral score, zero weight.
    pub fn neutral(method: MatchMethod) -> Self {
        Self {
            method,
            score: NEUTRAL_SCORE,
            confidence: 0.0,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.confidence == 0.0
    }
}

/// One signal's contribution to a persona's signal-based score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalContribution {
    pub signal_id: String,
    pub display_name: String,
    pub observed: SignalValue,
    /// Authored weight for this (persona, signal).
    pub weight: f64,
    /// Observed-vs-expected agreement in [-1, 1].
    pub agreement: f64,
    /// weight x agreement. Positive supports the persona, negative
    /// contradicts it.
    pub contribution: f64,
}
