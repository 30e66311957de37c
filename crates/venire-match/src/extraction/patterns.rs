//! Compiled extraction patterns, cached per catalog.
//!
//! Patterns are authored as plain regex strings on each signal; they are
//! compiled case-insensitively once. A pattern that fails to compile is
//! skipped with a warning — never fatal, extraction continues for every
//! other signal.

use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use tracing::warn;

use venire_core::PersonaCatalog;

/// Case-insensitive compiled patterns per signal id.
pub struct PatternSet {
    by_signal: HashMap<String, Vec<Regex>>,
}

impl PatternSet {
    /// Compile every signal's patterns. Malformed patterns are dropped
    /// with a warning.
    pub fn compile(catalog: &PersonaCatalog) -> Self {
        let mut by_signal: HashMap<String, Vec<Regex>> = HashMap::new();
        for signal in catalog.signals() {
            let mut compiled = Vec::new();
            for pattern in &signal.patterns {
                match RegexBuilder::new(pattern).case_insensitive(true).build() {
                    Ok(regex) => compiled.push(regex),
                    Err(error) => {
                        warn!(
                            signal_id = %signal.id,
                            pattern,
                            error = %error,
                            "skipping malformed extraction pattern"
                        );
                    }
                }
            }
            if !compiled.is_empty() {
                by_signal.insert(signal.id.clone(), compiled);
            }
        }
        Self { by_signal }
    }

    /// Whether any of the signal's patterns match the text.
    pub fn matches(&self, signal_id: &str, text: &str) -> bool {
        self.by_signal
            .get(signal_id)
            .map(|regexes| regexes.iter().any(|r| r.is_match(text)))
            .unwrap_or(false)
    }

    /// Signals that have at least one compiled pattern.
    pub fn pattern_signal_count(&self) -> usize {
        self.by_signal.len()
    }
}
