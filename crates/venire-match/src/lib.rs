//! # venire-match
//!
//! The matching engine: evidence extraction, the three scoring methods
//! (signal-based, embedding, Bayesian), ensemble fusion with rationale and
//! counterfactual explanation, the match update ledger, and the
//! incremental background re-match queue.
//!
//! Entry points: [`MatchEngine`] for synchronous matching and ingestion,
//! [`RematchQueue`] for background re-matching during live voir dire.

pub mod engine;
pub mod extraction;
pub mod fusion;
pub mod ledger;
pub mod providers;
pub mod rematch;
pub mod repository;
pub mod scoring;

pub use engine::MatchEngine;
pub use providers::{DegradationChain, TermVectorProvider};
pub use rematch::RematchQueue;
pub use repository::MemoryRepository;
