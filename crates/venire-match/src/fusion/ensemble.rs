//! Confidence-weighted fusion and deterministic ranking.
//!
//! fused probability = sum(score x confidence) / sum(confidence)
//! fused confidence  = sum(confidence^2)      / sum(confidence)
//!
//! Methods with zero confidence contribute nothing — they do not drag the
//! fused score toward the midpoint. All-zero confidence is the explicit
//! insufficient-evidence state: probability 0.5, confidence 0.

use venire_core::constants::NEUTRAL_SCORE;
use venire_core::models::{EnsembleMatch, MethodScore};

/// Fuse method scores into (probability, confidence).
pub fn fuse(scores: &[MethodScore]) -> (f64, f64) {
    let total_confidence: f64 = scores.iter().map(|s| s.confidence).sum();
    if total_confidence <= f64::EPSILON {
        return (NEUTRAL_SCORE, 0.0);
    }
    let probability = scores
        .iter()
        .map(|s| s.score * s.confidence)
        .sum::<f64>()
        / total_confidence;
    let confidence = scores
        .iter()
        .map(|s| s.confidence * s.confidence)
        .sum::<f64>()
        / total_confidence;
    (probability.clamp(0.0, 1.0), confidence.clamp(0.0, 1.0))
}

/// Rank matches in place: fused probability descending, ties broken by
/// fused confidence descending, then persona id ascending. `total_cmp`
/// keeps the order bit-deterministic for identical input.
pub fn rank(matches: &mut [EnsembleMatch]) {
    matches.sort_by(|a, b| {
        b.probability
            .total_cmp(&a.probability)
            .then_with(|| b.confidence.total_cmp(&a.confidence))
            .then_with(|| a.persona_id.cmp(&b.persona_id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use venire_core::models::MatchMethod;

    fn score(method: MatchMethod, s: f64, c: f64) -> MethodScore {
        MethodScore::new(method, s, c)
    }

    #[test]
    fn all_zero_confidence_is_insufficient_evidence() {
        let scores = [
            MethodScore::neutral(MatchMethod::SignalBased),
            MethodScore::neutral(MatchMethod::Embedding),
            MethodScore::neutral(MatchMethod::Bayesian),
        ];
        let (probability, confidence) = fuse(&scores);
        assert_eq!(probability, 0.5);
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn zero_confidence_method_contributes_nothing() {
        let with_neutral = [
            score(MatchMethod::SignalBased, 0.9, 0.8),
            MethodScore::neutral(MatchMethod::Embedding),
            MethodScore::neutral(MatchMethod::Bayesian),
        ];
        let (probability, _) = fuse(&with_neutral);
        // The neutral methods must not drag the score toward 0.5.
        assert!((probability - 0.9).abs() < 1e-12);
    }

    #[test]
    fn higher_confidence_method_dominates() {
        let scores = [
            score(MatchMethod::SignalBased, 0.9, 0.9),
            score(MatchMethod::Embedding, 0.1, 0.1),
            MethodScore::neutral(MatchMethod::Bayesian),
        ];
        let (probability, _) = fuse(&scores);
        assert!(probability > 0.7);
    }

    #[test]
    fn ranking_breaks_ties_by_confidence_then_id() {
        let make = |id: &str, p: f64, c: f64| EnsembleMatch {
            juror_id: "j".into(),
            persona_id: id.into(),
            persona_name: id.into(),
            probability: p,
            confidence: c,
            method_scores: Vec::new(),
            supporting: Vec::new(),
            contradicting: Vec::new(),
            rationale: String::new(),
            counterfactual: String::new(),
            degraded_methods: Vec::new(),
        };
        let mut matches = vec![
            make("zeta", 0.6, 0.4),
            make("alpha", 0.6, 0.4),
            make("mid", 0.6, 0.7),
            make("top", 0.8, 0.1),
        ];
        rank(&mut matches);
        let order: Vec<&str> = matches.iter().map(|m| m.persona_id.as_str()).collect();
        assert_eq!(order, vec!["top", "mid", "alpha", "zeta"]);
    }
}
