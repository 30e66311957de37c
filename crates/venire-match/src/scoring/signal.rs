//! Signal-based scorer: weighted agreement between a juror's latest facts
//! and a persona's authored weight profile.
//!
//! score = logistic(gain x sum(weight x agreement))
//! confidence = sum(fact confidence over covered weighted signals)
//!              / (number of weighted signals)
//!
//! Zero coverage is the uninformative case: score 0.5, confidence 0.

use std::collections::HashMap;

use venire_core::config::ScoringConfig;
use venire_core::evidence::JurorSignalFact;
use venire_core::models::{MatchMethod, MethodScore, SignalContribution};
use venire_core::{PersonaCatalog, PersonaSignalWeight};

use super::agreement;

/// Signal-based method outcome: the score plus the named contributions
/// the explainer builds rationale from.
#[derive(Debug, Clone)]
pub struct SignalScore {
    pub score: MethodScore,
    /// Positive contributions, ordered by magnitude descending.
    pub supporting: Vec<SignalContribution>,
    /// Negative contributions, ordered by magnitude descending.
    pub contradicting: Vec<SignalContribution>,
}

impl SignalScore {
    pub fn neutral() -> Self {
        Self {
            score: MethodScore::neutral(MatchMethod::SignalBased),
            supporting: Vec::new(),
            contradicting: Vec::new(),
        }
    }

    /// Sum of all contributions (the pre-squash evidence total).
    pub fn contribution_sum(&self) -> f64 {
        self.supporting
            .iter()
            .chain(&self.contradicting)
            .map(|c| c.contribution)
            .sum()
    }
}

/// Score one persona against the juror's latest facts.
pub fn score_persona(
    latest_facts: &[&JurorSignalFact],
    weights: &[PersonaSignalWeight],
    catalog: &PersonaCatalog,
    config: &ScoringConfig,
) -> SignalScore {
    if weights.is_empty() {
        return SignalScore::neutral();
    }

    let facts_by_signal: HashMap<&str, &JurorSignalFact> = latest_facts
        .iter()
        .map(|fact| (fact.signal_id.as_str(), *fact))
        .collect();

    let mut supporting = Vec::new();
    let mut contradicting = Vec::new();
    let mut covered_confidence = 0.0;

    for weight in weights {
        let Some(fact) = facts_by_signal.get(weight.signal_id.as_str()) else {
            continue;
        };
        let agreement = agreement(&fact.value, weight.expected.as_ref(), config);
        let contribution = weight.weight * agreement;
        covered_confidence += fact.confidence;

        let display_name = catalog
            .signal(&weight.signal_id)
            .map(|s| s.display_name.clone())
            .unwrap_or_else(|| weight.signal_id.clone());

        let entry = SignalContribution {
            signal_id: weight.signal_id.clone(),
            display_name,
            observed: fact.value.clone(),
            weight: weight.weight,
            agreement,
            contribution,
        };
        if contribution >= 0.0 {
            supporting.push(entry);
        } else {
            contradicting.push(entry);
        }
    }

    if supporting.is_empty() && contradicting.is_empty() {
        return SignalScore::neutral();
    }

    // Deterministic ordering: magnitude descending, signal id ascending.
    let by_magnitude = |a: &SignalContribution, b: &SignalContribution| {
        b.contribution
            .abs()
            .total_cmp(&a.contribution.abs())
            .then_with(|| a.signal_id.cmp(&b.signal_id))
    };
    supporting.sort_by(by_magnitude);
    contradicting.sort_by(by_magnitude);

    let sum: f64 = supporting
        .iter()
        .chain(&contradicting)
        .map(|c| c.contribution)
        .sum();
    let score = logistic(config.squash_gain * sum);
    let confidence = (covered_confidence / weights.len() as f64).clamp(0.0, 1.0);

    SignalScore {
        score: MethodScore::new(MatchMethod::SignalBased, score, confidence),
        supporting,
        contradicting,
    }
}

/// Standard logistic squashing to (0, 1); logistic(0) = 0.5.
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
