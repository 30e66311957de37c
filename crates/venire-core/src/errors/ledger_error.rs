/// Match update ledger errors.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("append failed: {reason}")]
    AppendFailed { reason: String },
}
