//! The fused match object surfaced to the host application.

use serde::{Deserialize, Serialize};

use super::method_score::{MatchMethod, MethodScore, SignalContribution};

/// The engine's final, method-combined belief that a persona matches a
/// juror, with the evidence trail that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsembleMatch {
    pub juror_id: String,
    pub persona_id: String,
    pub persona_name: String,
    /// Fused probability in [0, 1]. Probabilities across the catalog are
    /// independent per persona and need not sum to 1.
    pub probability: f64,
    /// Fused confidence in [0, 1]. Zero means "insufficient evidence".
    pub confidence: f64,
    /// The three method scores, in [signal_based, embedding, bayesian] order.
    pub method_scores: Vec<MethodScore>,
    /// Contributions with positive sign, ordered by magnitude descending.
    pub supporting: Vec<SignalContribution>,
    /// Contributions with negative sign, ordered by magnitude descending.
    pub contradicting: Vec<SignalContribution>,
    /// Human-readable explanation of what drove the score.
    pub rationale: String,
    /// Local sensitivity statement: which single observation, reversed,
    /// would most change this match.
    pub counterfactual: String,
    /// Methods that resolved to the neutral zero-confidence state.
    pub degraded_methods: Vec<MatchMethod>,
}

impl EnsembleMatch {
    pub fn method_score(&self, method: MatchMethod) -> Option<&MethodScore> {
        self.method_scores.iter().find(|m| m.method == method)
    }
}
