//! Deterministic rationale and counterfactual text.
//!
//! Both are computed purely from the contribution analysis — no external
//! call is involved. The counterfactual is a local sensitivity statement:
//! flip the single most load-bearing contradicting observation (or, absent
//! one, the weakest supporting observation), re-squash, re-fuse with the
//! same confidences, and report the shift. It is not a search over all
//! evidence combinations.

use venire_core::config::ScoringConfig;
use venire_core::models::{MatchMethod, MethodScore, SignalContribution};

use crate::scoring::signal::{logistic, SignalScore};

use super::ensemble::fuse;

/// Render rationale text for one persona from its top contributions.
pub fn rationale(
    persona_name: &str,
    probability: f64,
    supporting: &[SignalContribution],
    contradicting: &[SignalContribution],
    max_signals: usize,
) -> String {
    let mut out = format!(
        "{persona_name}: fused probability {:.2}.",
        probability
    );

    if supporting.is_empty() && contradicting.is_empty() {
        out.push_str(" No named signal evidence; score rests on semantic and distributional methods.");
        return out;
    }

    if !supporting.is_empty() {
        out.push_str(" Supported by ");
        out.push_str(&describe(supporting, max_signals));
        out.push('.');
    }
    if !contradicting.is_empty() {
        out.push_str(" Contradicted by ");
        out.push_str(&describe(contradicting, max_signals));
        out.push('.');
    }
    out
}

fn describe(contributions: &[SignalContribution], max_signals: usize) -> String {
    let named: Vec<String> = contributions
        .iter()
        .take(max_signals)
        .map(|c| format!("{} = {}", c.display_name, c.observed))
        .collect();
    let mut text = named.join(", ");
    if contributions.len() > max_signals {
        text.push_str(&format!(" (+{} more)", contributions.len() - max_signals));
    }
    text
}

/// Build the counterfactual statement for one persona.
///
/// `signal_score` carries the contribution analysis; `method_scores` are
/// the three fused inputs (signal-based first) and `fused_probability`
/// the current fused value.
pub fn counterfactual(
    signal_score: &SignalScore,
    method_scores: &[MethodScore],
    fused_probability: f64,
    config: &ScoringConfig,
) -> String {
    // Highest-magnitude contradicting signal first; else weakest supporter.
    let pivot = signal_score
        .contradicting
        .first()
        .or_else(|| signal_score.supporting.last());

    let Some(pivot) = pivot else {
        return "No observed signal evidence to reverse; additional voir dire responses would most change this match.".to_string();
    };

    let flipped_sum = signal_score.contribution_sum() - 2.0 * pivot.contribution;
    let flipped_signal = logistic(config.squash_gain * flipped_sum);

    let flipped_scores: Vec<MethodScore> = method_scores
        .iter()
        .map(|score| {
            if score.method == MatchMethod::SignalBased {
                MethodScore::new(score.method, flipped_signal, score.confidence)
            } else {
                *score
            }
        })
        .collect();
    let (flipped_probability, _) = fuse(&flipped_scores);
    let delta = flipped_probability - fused_probability;

    format!(
        "Reversing {} (observed {}) would shift the fused probability from {:.2} to {:.2} ({}{:.2}) — the single most sensitive observation for this match.",
        pivot.display_name,
        pivot.observed,
        fused_probability,
        flipped_probability,
        if delta >= 0.0 { "+" } else { "" },
        delta
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use venire_core::catalog::SignalValue;
    use venire_core::models::MatchMethod;

    fn contribution(signal: &str, value: f64) -> SignalContribution {
        SignalContribution {
            signal_id: signal.into(),
            display_name: signal.into(),
            observed: SignalValue::Bool(value >= 0.0),
            weight: value,
            agreement: 1.0,
            contribution: value,
        }
    }

    fn signal_score(
        supporting: Vec<SignalContribution>,
        contradicting: Vec<SignalContribution>,
    ) -> SignalScore {
        let sum: f64 = supporting
            .iter()
            .chain(&contradicting)
            .map(|c| c.contribution)
            .sum();
        let config = ScoringConfig::default();
        SignalScore {
            score: MethodScore::new(
                MatchMethod::SignalBased,
                logistic(config.squash_gain * sum),
                0.8,
            ),
            supporting,
            contradicting,
        }
    }

    #[test]
    fn rationale_names_top_signals_in_order() {
        let text = rationale(
            "Skeptical Analyst",
            0.72,
            &[contribution("distrusts_corporations", 0.8), contribution("prior_jury_service", 0.3)],
            &[contribution("trusts_experts", -0.4)],
            3,
        );
        assert!(text.contains("Skeptical Analyst"));
        assert!(text.contains("0.72"));
        assert!(text.contains("distrusts_corporations"));
        assert!(text.contains("Contradicted by trusts_experts"));
    }

    #[test]
    fn rationale_truncates_beyond_max() {
        let supporting: Vec<_> = (0..5).map(|i| contribution(&format!("s{i}"), 0.5)).collect();
        let text = rationale("P", 0.6, &supporting, &[], 3);
        assert!(text.contains("(+2 more)"));
    }

    #[test]
    fn counterfactual_prefers_contradicting_pivot() {
        let score = signal_score(
            vec![contribution("support_a", 0.6)],
            vec![contribution("conflict_b", -0.5)],
        );
        let methods = vec![
            score.score,
            MethodScore::neutral(MatchMethod::Embedding),
            MethodScore::neutral(MatchMethod::Bayesian),
        ];
        let (fused, _) = fuse(&methods);
        let text = counterfactual(&score, &methods, fused, &ScoringConfig::default());
        assert!(text.contains("conflict_b"), "{text}");
        assert!(text.contains('+'), "flipping a contradictor raises the probability: {text}");
    }

    #[test]
    fn counterfactual_falls_back_to_weakest_supporter() {
        let score = signal_score(
            vec![contribution("strong", 0.8), contribution("weak", 0.1)],
            vec![],
        );
        let methods = vec![
            score.score,
            MethodScore::neutral(MatchMethod::Embedding),
            MethodScore::neutral(MatchMethod::Bayesian),
        ];
        let (fused, _) = fuse(&methods);
        let text = counterfactual(&score, &methods, fused, &ScoringConfig::default());
        assert!(text.contains("weak"), "{text}");
    }

    #[test]
    fn counterfactual_without_evidence_is_generic() {
        let score = SignalScore::neutral();
        let methods = vec![
            score.score,
            MethodScore::neutral(MatchMethod::Embedding),
            MethodScore::neutral(MatchMethod::Bayesian),
        ];
        let text = counterfactual(&score, &methods, 0.5, &ScoringConfig::default());
        assert!(text.contains("No observed signal evidence"));
    }
}
