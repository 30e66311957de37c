//! Repository seam between the scoring core and the host's storage layer.
//!
//! The engine never talks to a database directly; hosts implement this
//! trait over their own persistence, and tests use the in-memory fake.

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::PersonaCatalog;
use crate::errors::VenireResult;
use crate::evidence::JurorEvidence;
use crate::models::MatchUpdateRecord;

/// Storage operations the matching engine requires.
pub trait IMatchRepository: Send + Sync {
    /// The juror's evidence log, or `None` for a juror not yet seen.
    fn juror_evidence(&self, juror_id: &str) -> VenireResult<Option<JurorEvidence>>;

    /// Persist the full evidence log (append-only semantics are enforced
    /// by the engine; implementations may overwrite the stored log).
    fn store_juror_evidence(&self, evidence: &JurorEvidence) -> VenireResult<()>;

    /// The validated persona catalog.
    fn persona_catalog(&self) -> VenireResult<Arc<PersonaCatalog>>;

    /// Last recorded fused probability per persona for this juror.
    /// Empty for a juror without a prior matching run.
    fn last_probabilities(&self, juror_id: &str) -> VenireResult<HashMap<String, f64>>;

    /// Record the fused probabilities of the latest run.
    fn store_probabilities(
        &self,
        juror_id: &str,
        probabilities: &HashMap<String, f64>,
    ) -> VenireResult<()>;

    /// Append one ledger record. Must be append-only.
    fn append_update(&self, record: &MatchUpdateRecord) -> VenireResult<()>;

    /// Full per-juror ledger stream in append order, for audit/timeline.
    fn updates_for(&self, juror_id: &str) -> VenireResult<Vec<MatchUpdateRecord>>;
}
