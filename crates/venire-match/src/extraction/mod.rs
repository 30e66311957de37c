//! Evidence extraction: raw juror input to typed signal facts.
//!
//! Extraction is a pure function of (input, catalog, config) — no engine
//! state is read, and identical inputs always yield the identical fact
//! set at the identical confidences.

pub mod patterns;
pub mod questionnaire;
pub mod text;
pub mod voir_dire;

pub use patterns::PatternSet;
pub use questionnaire::extract_questionnaire;
pub use text::extract_text;
pub use voir_dire::extract_voir_dire;

use venire_core::config::ExtractionConfig;
use venire_core::evidence::{EvidenceEvent, ExtractedFact};
use venire_core::PersonaCatalog;

/// Extract facts from any raw evidence event.
pub fn extract_event(
    event: &EvidenceEvent,
    catalog: &PersonaCatalog,
    patterns: &PatternSet,
    config: &ExtractionConfig,
) -> Vec<ExtractedFact> {
    match event {
        EvidenceEvent::Questionnaire { fields, source_ref } => {
            extract_questionnaire(fields, source_ref, catalog, config)
        }
        EvidenceEvent::Research { text, source_ref } => text::extract_text(
            text,
            venire_core::evidence::EvidenceSource::Research,
            source_ref,
            catalog,
            patterns,
            config,
        ),
        EvidenceEvent::VoirDire {
            question,
            answer,
            yes_no,
            source_ref,
        } => extract_voir_dire(question, answer, *yes_no, source_ref, catalog, patterns, config),
    }
}
