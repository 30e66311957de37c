//! Deterministic hashed term-frequency embedding provider.
//!
//! Buckets lowercase terms into a fixed-dimension vector by FNV-1a hash,
//! weights them sublinearly by frequency, and L2-normalizes. Far less
//! semantically rich than a neural model, but pure, deterministic, and
//! always available — the last link of every degradation chain.

use std::collections::HashMap;

use venire_core::constants::DEFAULT_EMBEDDING_DIMENSIONS;
use venire_core::errors::VenireResult;
use venire_core::traits::IEmbeddingProvider;

pub struct TermVectorProvider {
    dimensions: usize,
}

impl TermVectorProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn bucket(term: &str, dimensions: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dimensions
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut counts: HashMap<String, f32> = HashMap::new();
        let mut total = 0usize;
        for term in text
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .map(str::trim)
            .filter(|t| t.len() >= 2)
        {
            *counts.entry(term.to_lowercase()).or_default() += 1.0;
            total += 1;
        }

        let mut vector = vec![0.0f32; self.dimensions];
        if total == 0 {
            return vector;
        }

        for (term, count) in &counts {
            // Sublinear term frequency keeps repeated words from dominating.
            let tf = 1.0 + count.ln();
            vector[Self::bucket(term, self.dimensions)] += tf;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl Default for TermVectorProvider {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIMENSIONS)
    }
}

impl IEmbeddingProvider for TermVectorProvider {
    fn embed(&self, text: &str) -> VenireResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "term-vector"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let provider = TermVectorProvider::new(128);
        let a = provider.embed("union organizer, distrusts large employers").unwrap();
        let b = provider.embed("union organizer, distrusts large employers").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_text_yields_zero_vector() {
        let provider = TermVectorProvider::new(64);
        let v = provider.embed("  ").unwrap();
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn output_is_unit_norm() {
        let provider = TermVectorProvider::new(256);
        let v = provider.embed("skeptical of expert testimony").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn related_texts_are_closer_than_unrelated() {
        let provider = TermVectorProvider::new(256);
        let a = provider.embed("distrusts corporations and insurers").unwrap();
        let b = provider.embed("distrusts corporations deeply").unwrap();
        let c = provider.embed("enjoys gardening on weekends").unwrap();
        let dot = |x: &[f32], y: &[f32]| -> f32 { x.iter().zip(y).map(|(a, b)| a * b).sum() };
        assert!(dot(&a, &b) > dot(&a, &c));
    }
}
