//! Raw evidence events consumed from collaborators (intake forms, research
//! pipeline, live voir dire). The extractor turns these into typed facts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One piece of raw juror evidence, as delivered by the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EvidenceEvent {
    /// A submitted questionnaire: field name to raw string value.
    Questionnaire {
        fields: HashMap<String, String>,
        source_ref: String,
    },
    /// A research artifact's raw text (OCR output, background summary).
    Research { text: String, source_ref: String },
    /// A voir dire exchange. `yes_no` is present when the juror gave an
    /// explicit yes/no in addition to (or instead of) free text.
    VoirDire {
        question: String,
        answer: String,
        yes_no: Option<bool>,
        source_ref: String,
    },
}

impl EvidenceEvent {
    /// Reference to the originating artifact, used as the ledger trigger.
    pub fn source_ref(&self) -> &str {
        match self {
            Self::Questionnaire { source_ref, .. }
            | Self::Research { source_ref, .. }
            | Self::VoirDire { source_ref, .. } => source_ref,
        }
    }
}
