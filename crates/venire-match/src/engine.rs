//! MatchEngine: orchestrates extraction, the three scorers, fusion,
//! ranking, and the update ledger — for full matching runs and for
//! incremental updates during live voir dire.
//!
//! Per-persona scoring is embarrassingly parallel and runs on rayon; the
//! Bayesian updater's cross-persona renormalization is the single
//! synchronization point. Updates for one juror are serialized behind a
//! per-juror lock; distinct jurors proceed fully concurrently.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use dashmap::DashMap;
use rayon::prelude::*;
use tracing::{debug, instrument, warn};

use venire_core::catalog::PersonaCatalog;
use venire_core::config::EngineConfig;
use venire_core::errors::{CatalogError, VenireError, VenireResult};
use venire_core::evidence::{EvidenceEvent, EvidenceSource, JurorEvidence};
use venire_core::models::{
    BeliefSnapshot, EnsembleMatch, MatchMethod, MethodScore, UpdateOutcome,
};
use venire_core::traits::{
    Cancellable, CancellationToken, IMatchRepository, IRationaleEnricher,
};

use crate::extraction::{extract_event, PatternSet};
use crate::fusion::{counterfactual, fuse, rank, rationale};
use crate::ledger::record_deltas;
use crate::providers::{DegradationChain, TermVectorProvider};
use crate::scoring::signal::{score_persona, SignalScore};
use crate::scoring::{catalog_facts, BayesianUpdater, EmbeddingScorer};

/// Per-persona method scores before fusion.
struct PersonaScores {
    persona_id: String,
    persona_name: String,
    signal: SignalScore,
    embedding: MethodScore,
    embedding_degraded: bool,
    bayesian: MethodScore,
}

/// The ensemble matching engine.
pub struct MatchEngine {
    repository: Arc<dyn IMatchRepository>,
    embedding: EmbeddingScorer,
    enricher: Option<Box<dyn IRationaleEnricher>>,
    config: EngineConfig,
    /// Cached signal-based scores per juror, keyed by persona — lets an
    /// incremental update re-score only the personas whose weight profile
    /// references a changed signal.
    signal_cache: DashMap<String, HashMap<String, SignalScore>>,
    /// Compiled pattern sets keyed by catalog instance.
    pattern_cache: DashMap<usize, Arc<PatternSet>>,
    /// Per-juror serialization: a second update must never read a
    /// half-written fact set.
    juror_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl MatchEngine {
    /// Engine with the default embedding chain (the deterministic
    /// term-vector provider) and default configuration.
    pub fn new(repository: Arc<dyn IMatchRepository>) -> Self {
        let mut chain = DegradationChain::new();
        chain.push(Box::new(TermVectorProvider::default()));
        Self::with_chain(repository, chain, EngineConfig::default())
    }

    /// Engine with a custom embedding chain and configuration. The chain
    /// is usually a remote provider followed by the term-vector fallback.
    pub fn with_chain(
        repository: Arc<dyn IMatchRepository>,
        chain: DegradationChain,
        config: EngineConfig,
    ) -> Self {
        Self {
            repository,
            embedding: EmbeddingScorer::new(chain),
            enricher: None,
            config,
            signal_cache: DashMap::new(),
            pattern_cache: DashMap::new(),
            juror_locks: DashMap::new(),
        }
    }

    /// Attach a best-effort rationale enricher (LLM-backed in the host).
    pub fn with_enricher(mut self, enricher: Box<dyn IRationaleEnricher>) -> Self {
        self.enricher = Some(enricher);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run a full matching pass for one juror and return the top-N ranked
    /// matches. A juror with no evidence yields neutral matches
    /// (probability 0.5, confidence 0) — never an error.
    #[instrument(skip(self))]
    pub fn match_juror(&self, juror_id: &str) -> VenireResult<Vec<EnsembleMatch>> {
        validate_juror_id(juror_id)?;
        let lock = self.juror_lock(juror_id);
        let _guard = acquire(&lock);

        let catalog = self.active_catalog()?;
        let evidence = self
            .repository
            .juror_evidence(juror_id)?
            .unwrap_or_else(|| JurorEvidence::new(juror_id));

        let scores = self.score_all(&evidence, &catalog, None);
        let mut matches = self.build_matches(juror_id, scores);
        rank(&mut matches);

        self.commit_probabilities(juror_id, "match_run", &matches)?;

        matches.truncate(self.config.fusion.top_n);
        for candidate in &mut matches {
            self.enrich(candidate);
        }
        Ok(matches)
    }

    /// Incorporate one raw evidence event: extract facts, append them to
    /// the juror's log, and incrementally re-match.
    #[instrument(skip(self, event), fields(source_ref = event.source_ref()))]
    pub fn ingest(&self, juror_id: &str, event: &EvidenceEvent) -> VenireResult<UpdateOutcome> {
        self.ingest_cancellable(juror_id, event, &CancellationToken::new())
            .map(|outcome| {
                outcome.unwrap_or_else(|| unreachable!("fresh token is never cancelled"))
            })
    }

    /// [`ingest`](Self::ingest) with cooperative cancellation: returns
    /// `Ok(None)` when a newer update superseded this one mid-flight.
    pub fn ingest_cancellable(
        &self,
        juror_id: &str,
        event: &EvidenceEvent,
        token: &CancellationToken,
    ) -> VenireResult<Option<UpdateOutcome>> {
        validate_juror_id(juror_id)?;
        let lock = self.juror_lock(juror_id);
        let _guard = acquire(&lock);

        let catalog = self.active_catalog()?;
        let patterns = self.patterns_for(&catalog);
        let extracted = extract_event(event, &catalog, &patterns, &self.config.extraction);
        let facts_extracted = extracted.len();
        let changed_signals: BTreeSet<String> =
            extracted.iter().map(|f| f.signal_id.clone()).collect();

        let mut evidence = self
            .repository
            .juror_evidence(juror_id)?
            .unwrap_or_else(|| JurorEvidence::new(juror_id));
        let now = Utc::now();
        evidence.append_facts(extracted, now);
        match event {
            EvidenceEvent::Research { text, source_ref } => {
                evidence.append_narrative(EvidenceSource::Research, source_ref, text, now);
            }
            EvidenceEvent::VoirDire {
                answer, source_ref, ..
            } => {
                evidence.append_narrative(EvidenceSource::VoirDire, source_ref, answer, now);
            }
            EvidenceEvent::Questionnaire { .. } => {}
        }
        self.repository.store_juror_evidence(&evidence)?;

        if token.is_cancelled() {
            debug!(juror_id, "re-match superseded before scoring");
            return Ok(None);
        }

        // Incremental scoping: only personas weighting a changed signal
        // need their signal-based score recomputed.
        let affected = catalog.personas_weighting(changed_signals.iter().map(String::as_str));
        let rescored = affected.len();
        debug!(
            juror_id,
            changed = changed_signals.len(),
            affected = rescored,
            "incremental re-match"
        );

        let scores = self.score_all(&evidence, &catalog, Some(&affected));
        if token.is_cancelled() {
            debug!(juror_id, "re-match superseded before fusion");
            return Ok(None);
        }

        let mut matches = self.build_matches(juror_id, scores);
        rank(&mut matches);

        let records = self.commit_probabilities(juror_id, event.source_ref(), &matches)?;
        let primary_candidate = matches
            .first()
            .filter(|top| top.probability >= self.config.fusion.confirmation_threshold)
            .map(|top| top.persona_id.clone());

        Ok(Some(UpdateOutcome {
            juror_id: juror_id.to_string(),
            facts_extracted,
            records,
            primary_candidate,
            rescored_personas: rescored,
        }))
    }

    /// Audit view of the Bayesian posterior for one juror.
    pub fn belief_snapshot(&self, juror_id: &str) -> VenireResult<BeliefSnapshot> {
        validate_juror_id(juror_id)?;
        let catalog = self.active_catalog()?;
        let evidence = self
            .repository
            .juror_evidence(juror_id)?
            .unwrap_or_else(|| JurorEvidence::new(juror_id));
        let latest = evidence.latest_per_signal();
        let usable = catalog_facts(&latest, &catalog);
        Ok(BayesianUpdater::from_facts(&usable, &catalog, &self.config.scoring).snapshot())
    }

    // ---- internals ----

    fn active_catalog(&self) -> VenireResult<Arc<PersonaCatalog>> {
        let catalog = self.repository.persona_catalog()?;
        if catalog.is_empty() {
            return Err(CatalogError::NoPersonas.into());
        }
        Ok(catalog)
    }

    fn patterns_for(&self, catalog: &Arc<PersonaCatalog>) -> Arc<PatternSet> {
        let key = Arc::as_ptr(catalog) as usize;
        self.pattern_cache
            .entry(key)
            .or_insert_with(|| Arc::new(PatternSet::compile(catalog)))
            .clone()
    }

    /// Score every persona. `scope` names the personas whose signal-based
    /// score must be recomputed; others reuse the cached score when one
    /// exists. The Bayesian posterior is always replayed in full — its
    /// renormalization spans the whole persona set.
    fn score_all(
        &self,
        evidence: &JurorEvidence,
        catalog: &Arc<PersonaCatalog>,
        scope: Option<&BTreeSet<String>>,
    ) -> Vec<PersonaScores> {
        let latest = evidence.latest_per_signal();
        let usable = catalog_facts(&latest, catalog);
        let bayes = BayesianUpdater::from_facts(&usable, catalog, &self.config.scoring);

        let profile_text = evidence.profile_text();
        let profile_hash = evidence.profile_hash();

        let cached = self
            .signal_cache
            .get(&evidence.juror_id)
            .map(|entry| entry.clone())
            .unwrap_or_default();

        let scores: Vec<PersonaScores> = catalog
            .personas()
            .par_iter()
            .map(|persona| {
                let reusable = scope
                    .map(|set| !set.contains(&persona.id))
                    .unwrap_or(false);
                let signal = match cached.get(&persona.id) {
                    Some(hit) if reusable => hit.clone(),
                    _ => score_persona(
                        &usable,
                        catalog.weights_for(&persona.id),
                        catalog,
                        &self.config.scoring,
                    ),
                };
                let (embedding, embedding_degraded) = self.embedding.score(
                    &profile_text,
                    profile_hash,
                    persona,
                    &self.config.scoring,
                );
                PersonaScores {
                    persona_id: persona.id.clone(),
                    persona_name: persona.display_name.clone(),
                    signal,
                    embedding,
                    embedding_degraded,
                    bayesian: bayes.method_score(&persona.id),
                }
            })
            .collect();

        self.signal_cache.insert(
            evidence.juror_id.clone(),
            scores
                .iter()
                .map(|s| (s.persona_id.clone(), s.signal.clone()))
                .collect(),
        );

        scores
    }

    fn build_matches(&self, juror_id: &str, scores: Vec<PersonaScores>) -> Vec<EnsembleMatch> {
        scores
            .into_iter()
            .map(|persona| {
                let method_scores = vec![persona.signal.score, persona.embedding, persona.bayesian];
                let (probability, confidence) = fuse(&method_scores);

                let mut degraded_methods = Vec::new();
                if persona.signal.score.is_neutral() {
                    degraded_methods.push(MatchMethod::SignalBased);
                }
                if persona.embedding_degraded {
                    degraded_methods.push(MatchMethod::Embedding);
                }
                if persona.bayesian.is_neutral() {
                    degraded_methods.push(MatchMethod::Bayesian);
                }

                let rationale_text = rationale(
                    &persona.persona_name,
                    probability,
                    &persona.signal.supporting,
                    &persona.signal.contradicting,
                    self.config.fusion.rationale_signals,
                );
                let counterfactual_text = counterfactual(
                    &persona.signal,
                    &method_scores,
                    probability,
                    &self.config.scoring,
                );

                EnsembleMatch {
                    juror_id: juror_id.to_string(),
                    persona_id: persona.persona_id,
                    persona_name: persona.persona_name,
                    probability,
                    confidence,
                    method_scores,
                    supporting: persona.signal.supporting,
                    contradicting: persona.signal.contradicting,
                    rationale: rationale_text,
                    counterfactual: counterfactual_text,
                    degraded_methods,
                }
            })
            .collect()
    }

    /// Persist the run's fused probabilities and append ledger records
    /// for material deltas.
    fn commit_probabilities(
        &self,
        juror_id: &str,
        trigger: &str,
        ranked: &[EnsembleMatch],
    ) -> VenireResult<Vec<venire_core::models::MatchUpdateRecord>> {
        let previous = self.repository.last_probabilities(juror_id)?;
        let current: Vec<(String, f64)> = ranked
            .iter()
            .map(|m| (m.persona_id.clone(), m.probability))
            .collect();

        let records = record_deltas(
            self.repository.as_ref(),
            juror_id,
            trigger,
            &previous,
            &current,
            self.config.fusion.materiality_threshold,
            Utc::now(),
        )?;

        self.repository
            .store_probabilities(juror_id, &current.into_iter().collect())?;
        Ok(records)
    }

    /// Best-effort prose polishing. One retry, then the deterministic
    /// template text stands.
    fn enrich(&self, candidate: &mut EnsembleMatch) {
        let Some(enricher) = self.enricher.as_deref() else {
            return;
        };
        let enriched = attempt_twice(|| enricher.enrich_rationale(candidate), "rationale");
        if let Some(text) = enriched {
            candidate.rationale = text;
        }
        let enriched = attempt_twice(|| enricher.enrich_counterfactual(candidate), "counterfactual");
        if let Some(text) = enriched {
            candidate.counterfactual = text;
        }
    }

    fn juror_lock(&self, juror_id: &str) -> Arc<Mutex<()>> {
        self.juror_locks
            .entry(juror_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

fn validate_juror_id(juror_id: &str) -> VenireResult<()> {
    if juror_id.trim().is_empty() {
        return Err(VenireError::Validation("empty juror id".to_string()));
    }
    Ok(())
}

fn acquire(lock: &Mutex<()>) -> std::sync::MutexGuard<'_, ()> {
    match lock.lock() {
        Ok(guard) => guard,
        // A panicked holder cannot have left partial state we rely on;
        // recover the guard and continue.
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn attempt_twice<F>(operation: F, what: &str) -> Option<String>
where
    F: Fn() -> VenireResult<String>,
{
    for attempt in 0..2u8 {
        match operation() {
            Ok(text) if !text.trim().is_empty() => return Some(text),
            Ok(_) => {
                warn!(what, "enricher returned empty text, keeping template");
                return None;
            }
            Err(error) => {
                warn!(what, attempt, error = %error, "enrichment failed");
            }
        }
    }
    None
}
