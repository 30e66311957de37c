use crate::errors::VenireResult;
use crate::models::EnsembleMatch;

/// Optional natural-language polishing of rationale and counterfactual
/// text (LLM-backed in the host application).
///
/// Strictly best-effort: the deterministic template text is always
/// computed first and stands whenever enrichment fails. Implementations
/// should enforce their own timeouts.
pub trait IRationaleEnricher: Send + Sync {
    /// Rewrite the match's rationale into polished prose.
    fn enrich_rationale(&self, candidate: &EnsembleMatch) -> VenireResult<String>;

    /// Rewrite the match's counterfactual into polished prose.
    fn enrich_counterfactual(&self, candidate: &EnsembleMatch) -> VenireResult<String>;
}
