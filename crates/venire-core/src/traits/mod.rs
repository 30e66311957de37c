//! Trait seams: the engine touches the outside world only through these.

pub mod cancellation;
pub mod embedding;
pub mod enrichment;
pub mod repository;

pub use cancellation::{Cancellable, CancellationToken};
pub use embedding::IEmbeddingProvider;
pub use enrichment::IRationaleEnricher;
pub use repository::IMatchRepository;
