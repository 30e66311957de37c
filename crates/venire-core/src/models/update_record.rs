//! Append-only audit records for material probability changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One material fused-probability change for a (juror, persona) pair,
/// attributed to the evidence that triggered it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchUpdateRecord {
    pub id: Uuid,
    pub juror_id: String,
    pub persona_id: String,
    /// Reference to the triggering evidence (event source_ref).
    pub trigger: String,
    /// Previously recorded fused probability; `None` on first appearance.
    pub previous: Option<f64>,
    pub new_probability: f64,
    /// `new_probability - previous` (previous taken as the neutral
    /// midpoint when absent).
    pub delta: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Result of incorporating one evidence event into a juror's matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub juror_id: String,
    /// How many facts the event yielded.
    pub facts_extracted: usize,
    /// Ledger records appended by this update.
    pub records: Vec<MatchUpdateRecord>,
    /// Persona promoted to primary candidate, when the top fused
    /// probability crossed the confirmation threshold.
    pub primary_candidate: Option<String>,
    /// How many personas were re-scored (incremental scoping).
    pub rescored_personas: usize,
}
