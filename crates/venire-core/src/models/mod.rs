//! Output models: per-method scores, fused matches, ledger records, and
//! the Bayesian belief snapshot.

pub mod belief;
pub mod ensemble_match;
pub mod method_score;
pub mod update_record;

pub use belief::BeliefSnapshot;
pub use ensemble_match::EnsembleMatch;
pub use method_score::{MatchMethod, MethodScore, SignalContribution};
pub use update_record::{MatchUpdateRecord, UpdateOutcome};
