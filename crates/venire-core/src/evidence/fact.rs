//! Signal facts and the per-juror evidence log.
//!
//! Facts are never mutated, only superseded: the log retains the full
//! history for audit, and "latest fact per signal" is the authoritative
//! view the scorers consume. Ordering is deterministic — extraction
//! timestamp first, then a monotonic per-juror sequence number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::SignalValue;

/// Where a fact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSource {
    Questionnaire,
    Research,
    VoirDire,
    Manual,
}

impl EvidenceSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Questionnaire => "questionnaire",
            Self::Research => "research",
            Self::VoirDire => "voir_dire",
            Self::Manual => "manual",
        }
    }
}

/// A fact produced by the extractor, before it is stamped into the log.
///
/// Extraction is a pure function of its inputs; timestamps and sequence
/// numbers are assigned at append time, not at extraction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFact {
    pub signal_id: String,
    pub value: SignalValue,
    /// Extraction confidence in [0, 1].
    pub confidence: f64,
    pub source: EvidenceSource,
    /// Reference to the originating artifact (question id, document id...).
    pub source_ref: String,
}

/// A stamped, immutable fact in a juror's evidence log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurorSignalFact {
    pub juror_id: String,
    pub signal_id: String,
    pub value: SignalValue,
    pub confidence: f64,
    pub source: EvidenceSource,
    pub source_ref: String,
    pub extracted_at: DateTime<Utc>,
    /// Monotonic per-juror sequence; breaks timestamp ties.
    pub sequence: u64,
}

/// A piece of free text contributing to the juror's embedding profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeFragment {
    pub source: EvidenceSource,
    pub source_ref: String,
    pub text: String,
    pub added_at: DateTime<Utc>,
    pub sequence: u64,
}

/// Append-only evidence log for one juror.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JurorEvidence {
    pub juror_id: String,
    facts: Vec<JurorSignalFact>,
    narratives: Vec<NarrativeFragment>,
    next_sequence: u64,
}

impl JurorEvidence {
    pub fn new(juror_id: impl Into<String>) -> Self {
        Self {
            juror_id: juror_id.into(),
            facts: Vec::new(),
            narratives: Vec::new(),
            next_sequence: 0,
        }
    }

    /// Stamp and append extracted facts. Returns how many were appended.
    pub fn append_facts(&mut self, extracted: Vec<ExtractedFact>, at: DateTime<Utc>) -> usize {
        let appended = extracted.len();
        for fact in extracted {
            let sequence = self.next_sequence;
            self.next_sequence += 1;
            self.facts.push(JurorSignalFact {
                juror_id: self.juror_id.clone(),
                signal_id: fact.signal_id,
                value: fact.value,
                confidence: fact.confidence.clamp(0.0, 1.0),
                source: fact.source,
                source_ref: fact.source_ref,
                extracted_at: at,
                sequence,
            });
        }
        appended
    }

    /// Append a narrative fragment to the embedding profile.
    pub fn append_narrative(
        &mut self,
        source: EvidenceSource,
        source_ref: impl Into<String>,
        text: impl Into<String>,
        at: DateTime<Utc>,
    ) {
        let text = text.into();
        if text.trim().is_empty() {
            return;
        }
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.narratives.push(NarrativeFragment {
            source,
            source_ref: source_ref.into(),
            text,
            added_at: at,
            sequence,
        });
    }

    /// Full fact history, in append order.
    pub fn facts(&self) -> &[JurorSignalFact] {
        &self.facts
    }

    /// The authoritative view: latest fact per signal, ordered
    /// chronologically by (extracted_at, sequence). This is the defined,
    /// stable processing order for the Bayesian updater.
    pub fn latest_per_signal(&self) -> Vec<&JurorSignalFact> {
        let mut latest: HashMap<&str, &JurorSignalFact> = HashMap::new();
        for fact in &self.facts {
            match latest.get(fact.signal_id.as_str()) {
                Some(existing)
                    if (existing.extracted_at, existing.sequence)
                        >= (fact.extracted_at, fact.sequence) => {}
                _ => {
                    latest.insert(&fact.signal_id, fact);
                }
            }
        }
        let mut out: Vec<&JurorSignalFact> = latest.into_values().collect();
        out.sort_by(|a, b| {
            (a.extracted_at, a.sequence, a.signal_id.as_str())
                .cmp(&(b.extracted_at, b.sequence, b.signal_id.as_str()))
        });
        out
    }

    /// Latest fact for one signal from one source, if any.
    pub fn latest_for(&self, signal_id: &str, source: EvidenceSource) -> Option<&JurorSignalFact> {
        self.facts
            .iter()
            .filter(|f| f.signal_id == signal_id && f.source == source)
            .max_by_key(|f| (f.extracted_at, f.sequence))
    }

    /// Concatenated narrative text used for the embedding profile,
    /// in append order.
    pub fn profile_text(&self) -> String {
        let mut out = String::new();
        for fragment in &self.narratives {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(fragment.text.trim());
        }
        out
    }

    /// FNV-1a hash of the profile text; changes iff the free text changed.
    pub fn profile_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in self.profile_text().as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        h
    }

    pub fn narratives(&self) -> &[NarrativeFragment] {
        &self.narratives
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty() && self.narratives.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fact(signal: &str, value: bool) -> ExtractedFact {
        ExtractedFact {
            signal_id: signal.to_string(),
            value: SignalValue::Bool(value),
            confidence: 0.8,
            source: EvidenceSource::VoirDire,
            source_ref: "q1".to_string(),
        }
    }

    #[test]
    fn latest_per_signal_supersedes() {
        let t0 = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2025, 3, 1, 11, 0, 0).unwrap();

        let mut log = JurorEvidence::new("j1");
        log.append_facts(vec![fact("distrusts_corporations", true)], t0);
        log.append_facts(vec![fact("distrusts_corporations", false)], t1);

        let latest = log.latest_per_signal();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].value, SignalValue::Bool(false));
        assert_eq!(log.facts().len(), 2, "history is retained");
    }

    #[test]
    fn sequence_breaks_timestamp_ties() {
        let t0 = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        let mut log = JurorEvidence::new("j1");
        log.append_facts(vec![fact("s", true), fact("s", false)], t0);

        let latest = log.latest_per_signal();
        assert_eq!(latest[0].value, SignalValue::Bool(false));
    }

    #[test]
    fn latest_for_scopes_by_source() {
        let t0 = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2025, 3, 1, 11, 0, 0).unwrap();

        let mut log = JurorEvidence::new("j1");
        log.append_facts(
            vec![ExtractedFact {
                signal_id: "s".into(),
                value: SignalValue::Bool(true),
                confidence: 0.6,
                source: EvidenceSource::Research,
                source_ref: "doc1".into(),
            }],
            t0,
        );
        log.append_facts(vec![fact("s", false)], t1);

        let research = log.latest_for("s", EvidenceSource::Research).unwrap();
        assert_eq!(research.value, SignalValue::Bool(true));
        let voir_dire = log.latest_for("s", EvidenceSource::VoirDire).unwrap();
        assert_eq!(voir_dire.value, SignalValue::Bool(false));
        assert!(log.latest_for("s", EvidenceSource::Manual).is_none());
    }

    #[test]
    fn profile_hash_tracks_narrative_changes() {
        let t0 = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        let mut log = JurorEvidence::new("j1");
        let before = log.profile_hash();
        log.append_narrative(EvidenceSource::Research, "doc1", "union organizer", t0);
        assert_ne!(before, log.profile_hash());

        // Appending a fact does not touch the profile.
        let mid = log.profile_hash();
        log.append_facts(vec![fact("s", true)], t0);
        assert_eq!(mid, log.profile_hash());
    }

    #[test]
    fn blank_narrative_is_ignored() {
        let t0 = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        let mut log = JurorEvidence::new("j1");
        log.append_narrative(EvidenceSource::Research, "doc1", "   ", t0);
        assert!(log.narratives().is_empty());
    }
}
