/// Evidence extraction errors.
///
/// Malformed patterns and unmappable field values are NOT errors — they
/// are skipped with a warning. This enum covers the caller-side misuse
/// cases only.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unknown juror: {juror_id}")]
    UnknownJuror { juror_id: String },

    #[error("fact confidence {confidence} outside [0, 1]")]
    ConfidenceOutOfRange { confidence: f64 },
}
