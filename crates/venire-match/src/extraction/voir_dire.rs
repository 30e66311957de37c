//! Voir dire extraction: (question, free-text answer, optional yes/no).
//!
//! When the question itself matches a boolean signal's patterns and the
//! juror gave a yes/no answer, that signal is treated as directly
//! observed: the yes/no value becomes the fact at high confidence, and
//! pattern matching on the free-text answer is bypassed for that signal.
//! Every other signal is pattern-matched against the answer text as usual.

use std::collections::HashSet;

use venire_core::catalog::{SignalValue, ValueKind};
use venire_core::config::ExtractionConfig;
use venire_core::evidence::{EvidenceSource, ExtractedFact};
use venire_core::PersonaCatalog;

use super::patterns::PatternSet;

pub fn extract_voir_dire(
    question: &str,
    answer: &str,
    yes_no: Option<bool>,
    source_ref: &str,
    catalog: &PersonaCatalog,
    patterns: &PatternSet,
    config: &ExtractionConfig,
) -> Vec<ExtractedFact> {
    let mut facts = Vec::new();
    let mut directly_observed: HashSet<&str> = HashSet::new();

    if let Some(answered) = yes_no {
        for signal in catalog.signals() {
            if signal.kind == ValueKind::Bool && patterns.matches(&signal.id, question) {
                directly_observed.insert(signal.id.as_str());
                facts.push(ExtractedFact {
                    signal_id: signal.id.clone(),
                    value: SignalValue::Bool(answered),
                    confidence: config.direct_observation_confidence,
                    source: EvidenceSource::VoirDire,
                    source_ref: source_ref.to_string(),
                });
            }
        }
    }

    if !answer.trim().is_empty() {
        for signal in catalog.signals() {
            if directly_observed.contains(signal.id.as_str()) {
                continue;
            }
            if patterns.matches(&signal.id, answer) {
                facts.push(ExtractedFact {
                    signal_id: signal.id.clone(),
                    value: SignalValue::Bool(true),
                    confidence: config.pattern_confidence,
                    source: EvidenceSource::VoirDire,
                    source_ref: source_ref.to_string(),
                });
            }
        }
    }

    facts
}
