/// Scoring subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("no active personas to score against")]
    EmptyPersonaSet,

    #[error("belief distribution degenerated: {reason}")]
    DegenerateDistribution { reason: String },
}
