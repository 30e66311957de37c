//! Match update ledger: append-only audit records for material fused
//! probability changes.
//!
//! Exactly one record is produced per persona whose |delta| exceeds the
//! materiality threshold, with delta = new - previous. For a persona with
//! no previously recorded probability, materiality is measured against
//! the neutral midpoint and `previous` is recorded as `None`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use venire_core::constants::NEUTRAL_SCORE;
use venire_core::errors::VenireResult;
use venire_core::models::MatchUpdateRecord;
use venire_core::traits::IMatchRepository;

/// Compare old and new fused probabilities and append one record per
/// material change. Returns the appended records.
pub fn record_deltas(
    repository: &dyn IMatchRepository,
    juror_id: &str,
    trigger: &str,
    previous: &HashMap<String, f64>,
    current: &[(String, f64)],
    materiality_threshold: f64,
    recorded_at: DateTime<Utc>,
) -> VenireResult<Vec<MatchUpdateRecord>> {
    let mut records = Vec::new();

    for (persona_id, new_probability) in current {
        let prior = previous.get(persona_id).copied();
        let baseline = prior.unwrap_or(NEUTRAL_SCORE);
        let delta = new_probability - baseline;
        if delta.abs() <= materiality_threshold {
            continue;
        }

        let record = MatchUpdateRecord {
            id: Uuid::new_v4(),
            juror_id: juror_id.to_string(),
            persona_id: persona_id.clone(),
            trigger: trigger.to_string(),
            previous: prior,
            new_probability: *new_probability,
            delta,
            recorded_at,
        };
        debug!(
            juror_id,
            persona_id = %persona_id,
            delta,
            trigger,
            "appending match update record"
        );
        repository.append_update(&record)?;
        records.push(record);
    }

    Ok(records)
}
