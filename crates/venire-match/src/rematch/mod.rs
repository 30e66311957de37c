//! Background re-matching during live voir dire.
//!
//! Each new evidence event schedules a re-match keyed by juror id, with
//! at-most-one in-flight task per juror: a newer event cancels and
//! supersedes a stale in-flight computation for the same juror. Distinct
//! jurors proceed fully concurrently.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use venire_core::evidence::EvidenceEvent;
use venire_core::models::UpdateOutcome;
use venire_core::traits::{Cancellable, CancellationToken};

use crate::engine::MatchEngine;

struct Inflight {
    token: CancellationToken,
    handle: JoinHandle<Option<UpdateOutcome>>,
}

/// Cancellable background re-match queue over a shared [`MatchEngine`].
pub struct RematchQueue {
    engine: Arc<MatchEngine>,
    inflight: DashMap<String, Inflight>,
}

impl RematchQueue {
    pub fn new(engine: Arc<MatchEngine>) -> Self {
        Self {
            engine,
            inflight: DashMap::new(),
        }
    }

    /// Schedule a re-match for this juror, superseding any in-flight one.
    ///
    /// The superseded task is cancelled cooperatively — it stops at its
    /// next checkpoint and its partial results are discarded.
    pub fn submit(&self, juror_id: &str, event: EvidenceEvent) {
        if let Some((_, stale)) = self.inflight.remove(juror_id) {
            if !stale.handle.is_finished() {
                debug!(juror_id, "superseding in-flight re-match");
            }
            stale.token.cancel();
        }

        let token = CancellationToken::new();
        let task_token = token.clone();
        let engine = Arc::clone(&self.engine);
        let juror = juror_id.to_string();

        let handle = tokio::task::spawn_blocking(move || {
            match engine.ingest_cancellable(&juror, &event, &task_token) {
                Ok(outcome) => {
                    if outcome.is_none() {
                        debug!(juror_id = %juror, "re-match superseded mid-flight");
                    }
                    outcome
                }
                Err(error) => {
                    warn!(juror_id = %juror, error = %error, "background re-match failed");
                    None
                }
            }
        });

        self.inflight
            .insert(juror_id.to_string(), Inflight { token, handle });
    }

    /// Await the juror's current in-flight re-match, returning its
    /// outcome (`None` when superseded, failed, or nothing in flight).
    pub async fn join(&self, juror_id: &str) -> Option<UpdateOutcome> {
        let (_, inflight) = self.inflight.remove(juror_id)?;
        match inflight.handle.await {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(juror_id, error = %error, "re-match task panicked or was aborted");
                None
            }
        }
    }

    /// Number of jurors with an in-flight re-match.
    pub fn inflight_count(&self) -> usize {
        self.inflight.len()
    }
}
