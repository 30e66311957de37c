//! Engine configuration. Every tunable documented in the component specs
//! lives here; the materiality and confirmation thresholds in particular
//! are configuration, not validated invariants.

mod extraction_config;
mod fusion_config;
mod scoring_config;

pub use extraction_config::ExtractionConfig;
pub use fusion_config::FusionConfig;
pub use scoring_config::ScoringConfig;

use serde::{Deserialize, Serialize};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub extraction: ExtractionConfig,
    pub scoring: ScoringConfig,
    pub fusion: FusionConfig,
}
