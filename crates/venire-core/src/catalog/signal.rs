//! Signal: a named, typed observable fact about a juror.
//!
//! Values are a tagged union over {bool, numeric, categorical, text} with
//! conversion validated at ingestion time — never an untyped blob.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad grouping of signals, used for display and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    Demographic,
    Attitudinal,
    Experiential,
    Linguistic,
}

/// The value type a signal carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Bool,
    Numeric,
    Categorical,
    Text,
}

/// A typed signal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SignalValue {
    Bool(bool),
    Numeric(f64),
    Categorical(String),
    Text(String),
}

impl SignalValue {
    /// The kind discriminant of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Numeric(_) => ValueKind::Numeric,
            Self::Categorical(_) => ValueKind::Categorical,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Convert a raw string into a value of the given kind.
    ///
    /// Returns `None` when the raw value cannot represent the kind:
    /// unparseable booleans/numbers, non-finite numbers, empty strings.
    pub fn coerce(kind: ValueKind, raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match kind {
            ValueKind::Bool => parse_bool(trimmed).map(Self::Bool),
            ValueKind::Numeric => trimmed
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Self::Numeric),
            ValueKind::Categorical => Some(Self::Categorical(trimmed.to_string())),
            ValueKind::Text => Some(Self::Text(trimmed.to_string())),
        }
    }

    /// The boolean payload, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for SignalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Categorical(s) | Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Parse common affirmative/negative spellings into a boolean.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

/// An immutable catalog entry describing one observable fact about a juror.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    /// Stable identifier, e.g. `distrusts_corporations`.
    pub id: String,
    /// Human-readable name for rationale text.
    pub display_name: String,
    pub category: SignalCategory,
    pub kind: ValueKind,
    /// Enumerated possible values for categorical signals.
    #[serde(default)]
    pub allowed_values: Vec<String>,
    /// Questionnaire field this signal is read from, when declared.
    #[serde(default)]
    pub source_field: Option<String>,
    /// Case-insensitive extraction patterns applied to free text.
    /// A pattern that fails to compile is skipped, never fatal.
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl Signal {
    /// Whether `candidate` is one of the enumerated allowed values
    /// (case-insensitive). Signals without an enumeration accept anything.
    pub fn allows(&self, candidate: &str) -> bool {
        if self.allowed_values.is_empty() {
            return true;
        }
        self.allowed_values
            .iter()
            .any(|v| v.eq_ignore_ascii_case(candidate))
    }
}
