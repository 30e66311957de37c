//! The three independent scoring methods. Each produces a bounded score
//! and a confidence in [0, 1]; a method with no usable input resolves to
//! the explicit neutral state (0.5, confidence 0) instead of failing.

pub mod bayesian;
pub mod embedding;
pub mod signal;

pub use bayesian::BayesianUpdater;
pub use embedding::EmbeddingScorer;
pub use signal::{score_persona, SignalScore};

use tracing::warn;

use venire_core::catalog::SignalValue;
use venire_core::config::ScoringConfig;
use venire_core::evidence::JurorSignalFact;
use venire_core::PersonaCatalog;

/// Observed-vs-expected agreement in [-1, 1].
///
/// With an expected value: exact boolean match is +/-1; numeric values
/// agree within relative tolerance and disagree at a damped negative;
/// categorical comparison is case-insensitive with its own damping.
/// Without an expected value the weight rides on the signal's polarity:
/// boolean facts map true to +1 and false to -1, any other observed
/// value counts as presence (+1).
pub(crate) fn agreement(
    observed: &SignalValue,
    expected: Option<&SignalValue>,
    config: &ScoringConfig,
) -> f64 {
    match expected {
        None => match observed {
            SignalValue::Bool(true) => 1.0,
            SignalValue::Bool(false) => -1.0,
            _ => 1.0,
        },
        Some(SignalValue::Bool(want)) => match observed.as_bool() {
            Some(got) if got == *want => 1.0,
            Some(_) => -1.0,
            // A non-boolean observation of a boolean expectation counts
            // as presence of the signal.
            None => 1.0,
        },
        Some(SignalValue::Numeric(want)) => match observed {
            SignalValue::Numeric(got) => {
                let scale = want.abs().max(f64::EPSILON);
                if (got - want).abs() / scale <= config.numeric_tolerance {
                    1.0
                } else {
                    config.numeric_mismatch_agreement
                }
            }
            _ => config.numeric_mismatch_agreement,
        },
        Some(SignalValue::Categorical(want)) | Some(SignalValue::Text(want)) => match observed {
            SignalValue::Categorical(got) | SignalValue::Text(got) => {
                if got.eq_ignore_ascii_case(want) {
                    1.0
                } else {
                    config.categorical_mismatch_agreement
                }
            }
            SignalValue::Bool(true) => 1.0,
            SignalValue::Bool(false) => -1.0,
            SignalValue::Numeric(_) => config.categorical_mismatch_agreement,
        },
    }
}

/// Drop facts whose signal is absent from the catalog (taxonomy class 4:
/// skipped with a warning, never propagated).
pub(crate) fn catalog_facts<'a>(
    facts: &[&'a JurorSignalFact],
    catalog: &PersonaCatalog,
) -> Vec<&'a JurorSignalFact> {
    facts
        .iter()
        .filter(|fact| {
            let known = catalog.signal(&fact.signal_id).is_some();
            if !known {
                warn!(
                    juror_id = %fact.juror_id,
                    signal_id = %fact.signal_id,
                    "fact references a signal absent from the catalog, skipping"
                );
            }
            known
        })
        .copied()
        .collect()
}
