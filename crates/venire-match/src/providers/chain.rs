//! Fallback chain for embedding generation.
//!
//! Providers are tried in priority order; the first success wins and
//! every fallback is logged. Each provider is attempted exactly once per
//! call — failures move down the chain, they are not silently retried.

use tracing::warn;

use venire_core::traits::IEmbeddingProvider;

/// Ordered embedding provider chain.
pub struct DegradationChain {
    providers: Vec<Box<dyn IEmbeddingProvider>>,
}

impl DegradationChain {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.providers.push(provider);
    }

    /// Embed via the first provider that succeeds.
    ///
    /// Returns `None` when every provider is unavailable or failed; the
    /// caller resolves that to the neutral zero-confidence state.
    pub fn embed(&self, text: &str) -> Option<(Vec<f32>, &str)> {
        for (i, provider) in self.providers.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }
            match provider.embed(text) {
                Ok(vector) => {
                    if i > 0 {
                        warn!(
                            fallback = provider.name(),
                            skipped = i,
                            "embedding degraded to fallback provider"
                        );
                    }
                    return Some((vector, provider.name()));
                }
                Err(error) => {
                    warn!(
                        provider = provider.name(),
                        error = %error,
                        "embedding provider failed, trying next in chain"
                    );
                }
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for DegradationChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use venire_core::errors::{ScoringError, VenireResult};

    struct FailingProvider;
    impl IEmbeddingProvider for FailingProvider {
        fn embed(&self, _text: &str) -> VenireResult<Vec<f32>> {
            Err(ScoringError::DegenerateDistribution {
                reason: "mock failure".into(),
            }
            .into())
        }
        fn dimensions(&self) -> usize {
            8
        }
        fn name(&self) -> &str {
            "failing-mock"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    struct ConstProvider;
    impl IEmbeddingProvider for ConstProvider {
        fn embed(&self, _text: &str) -> VenireResult<Vec<f32>> {
            Ok(vec![1.0; 8])
        }
        fn dimensions(&self) -> usize {
            8
        }
        fn name(&self) -> &str {
            "const"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn falls_through_to_second_provider() {
        let mut chain = DegradationChain::new();
        chain.push(Box::new(FailingProvider));
        chain.push(Box::new(ConstProvider));
        let (vector, name) = chain.embed("text").expect("fallback succeeds");
        assert_eq!(name, "const");
        assert_eq!(vector.len(), 8);
    }

    #[test]
    fn exhausted_chain_returns_none() {
        let mut chain = DegradationChain::new();
        chain.push(Box::new(FailingProvider));
        chain.push(Box::new(FailingProvider));
        assert!(chain.embed("text").is_none());
    }

    #[test]
    fn empty_chain_returns_none() {
        assert!(DegradationChain::new().embed("text").is_none());
    }
}
