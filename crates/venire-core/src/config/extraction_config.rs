use serde::{Deserialize, Serialize};

use crate::constants;

/// Evidence extraction configuration: the fixed confidences assigned per
/// extraction path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Pattern match on free text.
    pub pattern_confidence: f64,
    /// Yes/no answer to a question matching a boolean signal's patterns.
    pub direct_observation_confidence: f64,
    /// Exact categorical/boolean questionnaire match.
    pub exact_match_confidence: f64,
    /// Parsed numeric questionnaire field.
    pub numeric_confidence: f64,
    /// Non-empty text questionnaire field (presence only).
    pub text_presence_confidence: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            pattern_confidence: constants::PATTERN_MATCH_CONFIDENCE,
            direct_observation_confidence: constants::DIRECT_OBSERVATION_CONFIDENCE,
            exact_match_confidence: constants::QUESTIONNAIRE_EXACT_CONFIDENCE,
            numeric_confidence: constants::QUESTIONNAIRE_NUMERIC_CONFIDENCE,
            text_presence_confidence: constants::QUESTIONNAIRE_TEXT_CONFIDENCE,
        }
    }
}
