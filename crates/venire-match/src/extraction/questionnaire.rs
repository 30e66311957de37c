//! Questionnaire field extraction.
//!
//! Each signal with a declared `source_field` is read from the submitted
//! field map with type-specific matching: exact (case-insensitive)
//! enumerated match for categorical, truthy/falsey parse for boolean,
//! numeric parse for numeric, non-empty presence for text. Confidence is
//! fixed per value-type class.

use std::collections::HashMap;

use tracing::debug;

use venire_core::catalog::{parse_bool, SignalValue, ValueKind};
use venire_core::config::ExtractionConfig;
use venire_core::evidence::{EvidenceSource, ExtractedFact};
use venire_core::PersonaCatalog;

/// Extract facts from a questionnaire submission.
///
/// Signals iterate in stable (id) order, so output order is deterministic.
pub fn extract_questionnaire(
    fields: &HashMap<String, String>,
    source_ref: &str,
    catalog: &PersonaCatalog,
    config: &ExtractionConfig,
) -> Vec<ExtractedFact> {
    let mut facts = Vec::new();

    for signal in catalog.signals() {
        let Some(field) = signal.source_field.as_deref() else {
            continue;
        };
        let Some(raw) = fields.get(field) else {
            continue;
        };

        // Boolean fields are presence-based: explicit yes/no spellings
        // parse, any other non-empty value counts as observed-true.
        let coerced = match signal.kind {
            ValueKind::Bool if !raw.trim().is_empty() => {
                Some(SignalValue::Bool(parse_bool(raw).unwrap_or(true)))
            }
            _ => SignalValue::coerce(signal.kind, raw),
        };
        let Some(value) = coerced else {
            debug!(
                signal_id = %signal.id,
                field,
                "questionnaire value not coercible, skipping"
            );
            continue;
        };

        // Categorical values must be one of the enumerated possibilities.
        if let SignalValue::Categorical(ref candidate) = value {
            if !signal.allows(candidate) {
                debug!(
                    signal_id = %signal.id,
                    candidate = %candidate,
                    "categorical value outside enumeration, skipping"
                );
                continue;
            }
        }

        let confidence = match signal.kind {
            ValueKind::Bool | ValueKind::Categorical => config.exact_match_confidence,
            ValueKind::Numeric => config.numeric_confidence,
            ValueKind::Text => config.text_presence_confidence,
        };

        facts.push(ExtractedFact {
            signal_id: signal.id.clone(),
            value,
            confidence,
            source: EvidenceSource::Questionnaire,
            source_ref: source_ref.to_string(),
        });
    }

    facts
}
