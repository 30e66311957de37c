//! Error taxonomy for the matching engine.
//!
//! Only genuine input-validation problems surface as errors. Degraded
//! evidence, failed external dependencies, and catalog inconsistencies
//! resolve to neutral zero-confidence states with a logged warning — a
//! match result is always producible.

mod catalog_error;
mod extraction_error;
mod ledger_error;
mod scoring_error;

pub use catalog_error::CatalogError;
pub use extraction_error::ExtractionError;
pub use ledger_error::LedgerError;
pub use scoring_error::ScoringError;

/// Top-level error for the Venire engine.
#[derive(Debug, thiserror::Error)]
pub enum VenireError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("repository failure: {0}")]
    Repository(String),
}

/// Convenience result alias used across the workspace.
pub type VenireResult<T> = Result<T, VenireError>;
