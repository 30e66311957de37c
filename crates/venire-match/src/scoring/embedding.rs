//! Embedding scorer: semantic similarity between the juror's free-text
//! profile and each persona's reference embedding.
//!
//! score = (cosine + 1) / 2, confidence saturates with text length:
//! len / (len + tau). No text, no reference embedding, or a failed
//! provider chain all resolve to the neutral zero-confidence state.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::{debug, warn};

use venire_core::config::ScoringConfig;
use venire_core::models::{MatchMethod, MethodScore};
use venire_core::Persona;

use crate::providers::DegradationChain;

/// Scores personas against a juror profile embedding.
///
/// Juror embeddings are cached per profile-text hash so unchanged free
/// text is never re-embedded across incremental updates.
pub struct EmbeddingScorer {
    chain: DegradationChain,
    cache: Mutex<HashMap<u64, Vec<f32>>>,
}

impl EmbeddingScorer {
    pub fn new(chain: DegradationChain) -> Self {
        Self {
            chain,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Score one persona. `profile_hash` keys the embedding cache and must
    /// change iff `profile_text` changed.
    pub fn score(
        &self,
        profile_text: &str,
        profile_hash: u64,
        persona: &Persona,
        config: &ScoringConfig,
    ) -> (MethodScore, bool) {
        if profile_text.trim().is_empty() {
            return (MethodScore::neutral(MatchMethod::Embedding), true);
        }
        let Some(reference) = persona.reference_embedding.as_deref() else {
            debug!(persona_id = %persona.id, "persona has no reference embedding");
            return (MethodScore::neutral(MatchMethod::Embedding), true);
        };

        let Some(vector) = self.embed_cached(profile_text, profile_hash) else {
            warn!("embedding chain exhausted, scoring degraded to neutral");
            return (MethodScore::neutral(MatchMethod::Embedding), true);
        };

        let Some(similarity) = cosine(&vector, reference) else {
            warn!(
                persona_id = %persona.id,
                juror_dims = vector.len(),
                persona_dims = reference.len(),
                "embedding dimension mismatch, scoring degraded to neutral"
            );
            return (MethodScore::neutral(MatchMethod::Embedding), true);
        };

        let score = ((similarity + 1.0) / 2.0).clamp(0.0, 1.0);
        let len = profile_text.len() as f64;
        let confidence = len / (len + config.text_saturation_chars);
        (
            MethodScore::new(MatchMethod::Embedding, score, confidence),
            false,
        )
    }

    fn embed_cached(&self, text: &str, hash: u64) -> Option<Vec<f32>> {
        if let Ok(cache) = self.cache.lock() {
            if let Some(hit) = cache.get(&hash) {
                return Some(hit.clone());
            }
        }
        let (vector, _provider) = self.chain.embed(text)?;
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(hash, vector.clone());
        }
        Some(vector)
    }
}

/// Cosine similarity in [-1, 1]. `None` on dimension mismatch or a
/// zero-norm vector.
pub fn cosine(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        dot += (*x as f64) * (*y as f64);
        norm_a += (*x as f64).powi(2);
        norm_b += (*y as f64).powi(2);
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom <= f64::EPSILON {
        return None;
    }
    Some((dot / denom).clamp(-1.0, 1.0))
}
