//! Bayesian updater: persona membership as a discrete distribution,
//! sequentially updated by likelihood ratios from each fact.
//!
//! likelihood ratio = exp(gain x weight x agreement)
//! confidence = 1 - H(posterior) / ln(N)
//!
//! Updates over distinct signals commute; same-signal evidence supersedes
//! (latest fact per signal) and is never multiplied twice. The posterior
//! sums to 1 after every update.

use std::collections::BTreeMap;

use tracing::warn;

use venire_core::config::ScoringConfig;
use venire_core::evidence::JurorSignalFact;
use venire_core::models::{BeliefSnapshot, MatchMethod, MethodScore};
use venire_core::PersonaCatalog;

use super::agreement;

/// Sequential belief updater over the active persona set.
#[derive(Debug, Clone)]
pub struct BayesianUpdater {
    /// Persona id to posterior probability; BTreeMap keeps iteration
    /// (and therefore normalization arithmetic) in stable order.
    beliefs: BTreeMap<String, f64>,
    facts_processed: usize,
}

impl BayesianUpdater {
    /// Uniform prior over the catalog's personas.
    pub fn uniform(catalog: &PersonaCatalog) -> Self {
        let n = catalog.persona_count().max(1) as f64;
        let beliefs = catalog
            .personas()
            .iter()
            .map(|p| (p.id.clone(), 1.0 / n))
            .collect();
        Self {
            beliefs,
            facts_processed: 0,
        }
    }

    /// Replay a fact sequence (latest per signal, chronological order)
    /// from the uniform prior. Incremental updating and full replay are
    /// equivalent by construction.
    pub fn from_facts(
        facts: &[&JurorSignalFact],
        catalog: &PersonaCatalog,
        config: &ScoringConfig,
    ) -> Self {
        let mut updater = Self::uniform(catalog);
        for fact in facts {
            updater.observe(fact, catalog, config);
        }
        updater
    }

    /// Incorporate one fact: multiply each weighted persona's belief by
    /// its likelihood ratio, then renormalize the full distribution.
    pub fn observe(
        &mut self,
        fact: &JurorSignalFact,
        catalog: &PersonaCatalog,
        config: &ScoringConfig,
    ) {
        let mut touched = false;
        for (persona_id, belief) in self.beliefs.iter_mut() {
            let Some(weight) = catalog
                .weights_for(persona_id)
                .iter()
                .find(|w| w.signal_id == fact.signal_id)
            else {
                continue;
            };
            let agreement = agreement(&fact.value, weight.expected.as_ref(), config);
            let ratio = (config.likelihood_gain * weight.weight * agreement).exp();
            *belief *= ratio;
            touched = true;
        }
        if !touched {
            return;
        }
        self.facts_processed += 1;
        self.normalize();
    }

    fn normalize(&mut self) {
        let total: f64 = self.beliefs.values().sum();
        if !total.is_finite() || total <= f64::MIN_POSITIVE {
            // Numerically degenerate — fall back to uniform rather than
            // propagating NaN into downstream fusion.
            warn!(total, "belief mass degenerated, resetting to uniform");
            let n = self.beliefs.len().max(1) as f64;
            for belief in self.beliefs.values_mut() {
                *belief = 1.0 / n;
            }
            return;
        }
        for belief in self.beliefs.values_mut() {
            *belief /= total;
        }
    }

    /// Posterior probability for one persona (0 when unknown).
    pub fn posterior(&self, persona_id: &str) -> f64 {
        self.beliefs.get(persona_id).copied().unwrap_or(0.0)
    }

    /// Distribution confidence: 1 - normalized entropy. A near-uniform
    /// posterior after evidence signals weak discriminating power; zero
    /// facts processed reports 0 outright.
    pub fn confidence(&self) -> f64 {
        if self.facts_processed == 0 {
            return 0.0;
        }
        let n = self.beliefs.len();
        if n <= 1 {
            return 1.0;
        }
        let entropy: f64 = self
            .beliefs
            .values()
            .filter(|p| **p > 0.0)
            .map(|p| -p * p.ln())
            .sum();
        (1.0 - entropy / (n as f64).ln()).clamp(0.0, 1.0)
    }

    /// Method score for one persona: its posterior with the shared
    /// distribution confidence.
    pub fn method_score(&self, persona_id: &str) -> MethodScore {
        MethodScore::new(
            MatchMethod::Bayesian,
            self.posterior(persona_id),
            self.confidence(),
        )
    }

    pub fn facts_processed(&self) -> usize {
        self.facts_processed
    }

    /// Audit snapshot of the full posterior.
    pub fn snapshot(&self) -> BeliefSnapshot {
        BeliefSnapshot {
            posterior: self
                .beliefs
                .iter()
                .map(|(id, p)| (id.clone(), *p))
                .collect(),
            confidence: self.confidence(),
            facts_processed: self.facts_processed,
        }
    }
}
