//! Free-text extraction: research artifacts and voir dire answers.

use venire_core::catalog::SignalValue;
use venire_core::config::ExtractionConfig;
use venire_core::evidence::{EvidenceSource, ExtractedFact};
use venire_core::PersonaCatalog;

use super::patterns::PatternSet;

/// Apply every signal's patterns to the text. A match yields a
/// boolean-true fact at medium confidence, regardless of the signal's
/// declared value kind — pattern presence is inherently a yes/no
/// observation.
pub fn extract_text(
    text: &str,
    source: EvidenceSource,
    source_ref: &str,
    catalog: &PersonaCatalog,
    patterns: &PatternSet,
    config: &ExtractionConfig,
) -> Vec<ExtractedFact> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut facts = Vec::new();
    for signal in catalog.signals() {
        if patterns.matches(&signal.id, text) {
            facts.push(ExtractedFact {
                signal_id: signal.id.clone(),
                value: SignalValue::Bool(true),
                confidence: config.pattern_confidence,
                source,
                source_ref: source_ref.to_string(),
            });
        }
    }
    facts
}
