//! Embedding providers and the degradation fallback chain.

pub mod chain;
pub mod term_vector;

pub use chain::DegradationChain;
pub use term_vector::TermVectorProvider;
