//! Engine-wide default constants. Tunable values are surfaced through
//! [`crate::config::EngineConfig`]; these are the fallbacks.

/// Confidence assigned to a boolean fact observed directly from a yes/no
/// voir dire answer whose question matched the signal's patterns.
pub const DIRECT_OBSERVATION_CONFIDENCE: f64 = 0.9;

/// Confidence assigned to a fact extracted by pattern match on free text.
pub const PATTERN_MATCH_CONFIDENCE: f64 = 0.7;

/// Confidence for an exact categorical or boolean questionnaire match.
pub const QUESTIONNAIRE_EXACT_CONFIDENCE: f64 = 0.85;

/// Confidence for a parsed numeric questionnaire field.
pub const QUESTIONNAIRE_NUMERIC_CONFIDENCE: f64 = 0.8;

/// Confidence for a non-empty text questionnaire field (presence only).
pub const QUESTIONNAIRE_TEXT_CONFIDENCE: f64 = 0.6;

/// Minimum fused-probability change that produces a ledger record.
pub const DEFAULT_MATERIALITY_THRESHOLD: f64 = 0.01;

/// Fused probability above which a persona becomes the primary candidate.
pub const DEFAULT_CONFIRMATION_THRESHOLD: f64 = 0.3;

/// Number of ranked matches surfaced per juror.
pub const DEFAULT_TOP_N: usize = 5;

/// Maximum supporting/contradicting signals named in rationale text.
pub const DEFAULT_RATIONALE_SIGNALS: usize = 3;

/// Logistic gain applied to the summed signal contributions.
pub const DEFAULT_SQUASH_GAIN: f64 = 1.2;

/// Exponent gain for converting (weight x agreement) to a likelihood ratio.
pub const DEFAULT_LIKELIHOOD_GAIN: f64 = 1.0;

/// Relative tolerance for numeric expected-value agreement.
pub const DEFAULT_NUMERIC_TOLERANCE: f64 = 0.15;

/// Damped agreement for a numeric fact outside tolerance.
pub const NUMERIC_MISMATCH_AGREEMENT: f64 = -0.5;

/// Damped agreement for a categorical fact that differs from expectation.
pub const CATEGORICAL_MISMATCH_AGREEMENT: f64 = -0.7;

/// Character count at which embedding confidence reaches one half.
pub const DEFAULT_TEXT_SATURATION_CHARS: f64 = 400.0;

/// Dimensionality of the built-in term-vector embedding provider.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 256;

/// Score reported when a method has no usable input.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Tolerance for the Bayesian posterior sum-to-one check.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-9;
