//! # venire-core
//!
//! Foundation crate for the Venire juror-to-persona matching engine.
//! Defines the signal/persona catalog, evidence types, match models,
//! config, errors, and the trait seams the engine is wired through.
//! Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod evidence;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::{Persona, PersonaCatalog, PersonaSignalWeight, Signal, SignalValue, ValueKind};
pub use config::EngineConfig;
pub use errors::{VenireError, VenireResult};
pub use evidence::{EvidenceEvent, EvidenceSource, JurorEvidence, JurorSignalFact};
pub use models::{EnsembleMatch, MatchMethod, MatchUpdateRecord, MethodScore};
