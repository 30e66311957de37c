//! Personas and their per-signal weight profiles.
//!
//! Authored offline, read-only to the engine. `PersonaCatalog::build`
//! validates the authored parts once and indexes them for scoring.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{CatalogError, VenireResult};

use super::signal::{Signal, SignalValue};

/// A pre-authored behavioral archetype jurors are matched against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Stable identifier, e.g. `skeptical_analyst`.
    pub id: String,
    pub display_name: String,
    /// Archetype family grouping related personas.
    pub family: String,
    /// Reference embedding of `description`, computed offline.
    #[serde(default)]
    pub reference_embedding: Option<Vec<f32>>,
    /// Text the reference embedding was produced from.
    #[serde(default)]
    pub description: Option<String>,
}

/// How strongly observing one signal (at an expected value) shifts belief
/// toward or against a persona. Weight is signed, in [-1, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaSignalWeight {
    pub persona_id: String,
    pub signal_id: String,
    pub weight: f64,
    /// Value the persona expects to observe. Absent means the signal's
    /// mere presence carries the weight.
    #[serde(default)]
    pub expected: Option<SignalValue>,
}

/// Validated, indexed view over signals, personas, and weights.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    signals: BTreeMap<String, Signal>,
    personas: Vec<Persona>,
    /// Weight profile per persona id.
    weights: HashMap<String, Vec<PersonaSignalWeight>>,
    /// Inverse index: which personas weight a given signal.
    signal_to_personas: HashMap<String, BTreeSet<String>>,
}

impl PersonaCatalog {
    /// Validate and index the authored catalog parts.
    ///
    /// Hard failures (empty/duplicate ids, weights outside [-1, 1]) reject
    /// the whole catalog. Weights referencing an unknown signal or persona
    /// are dropped with a warning — the rest of the catalog stands.
    pub fn build(
        signals: Vec<Signal>,
        personas: Vec<Persona>,
        weights: Vec<PersonaSignalWeight>,
    ) -> VenireResult<Self> {
        let mut signal_index = BTreeMap::new();
        for signal in signals {
            if signal.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { entity: "signal" }.into());
            }
            if signal_index.contains_key(&signal.id) {
                return Err(CatalogError::DuplicateSignal { id: signal.id }.into());
            }
            signal_index.insert(signal.id.clone(), signal);
        }

        let mut seen = BTreeSet::new();
        for persona in &personas {
            if persona.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { entity: "persona" }.into());
            }
            if !seen.insert(persona.id.clone()) {
                return Err(CatalogError::DuplicatePersona {
                    id: persona.id.clone(),
                }
                .into());
            }
        }

        let mut by_persona: HashMap<String, Vec<PersonaSignalWeight>> = HashMap::new();
        let mut signal_to_personas: HashMap<String, BTreeSet<String>> = HashMap::new();
        for weight in weights {
            if !weight.weight.is_finite() || weight.weight.abs() > 1.0 {
                return Err(CatalogError::WeightOutOfRange {
                    persona_id: weight.persona_id,
                    signal_id: weight.signal_id,
                    weight: weight.weight,
                }
                .into());
            }
            if !signal_index.contains_key(&weight.signal_id) {
                warn!(
                    persona_id = %weight.persona_id,
                    signal_id = %weight.signal_id,
                    "dropping weight for unknown signal"
                );
                continue;
            }
            if !seen.contains(&weight.persona_id) {
                warn!(
                    persona_id = %weight.persona_id,
                    signal_id = %weight.signal_id,
                    "dropping weight for unknown persona"
                );
                continue;
            }
            signal_to_personas
                .entry(weight.signal_id.clone())
                .or_default()
                .insert(weight.persona_id.clone());
            by_persona
                .entry(weight.persona_id.clone())
                .or_default()
                .push(weight);
        }

        Ok(Self {
            signals: signal_index,
            personas,
            weights: by_persona,
            signal_to_personas,
        })
    }

    pub fn signal(&self, id: &str) -> Option<&Signal> {
        self.signals.get(id)
    }

    /// All signals in stable (id) order.
    pub fn signals(&self) -> impl Iterator<Item = &Signal> {
        self.signals.values()
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn persona(&self, id: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id == id)
    }

    /// The weight profile for a persona. Empty when none are authored.
    pub fn weights_for(&self, persona_id: &str) -> &[PersonaSignalWeight] {
        self.weights
            .get(persona_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Personas whose weight profile references any of the given signals.
    /// Drives incremental re-match scoping.
    pub fn personas_weighting<'a, I>(&self, signal_ids: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut out = BTreeSet::new();
        for signal_id in signal_ids {
            if let Some(personas) = self.signal_to_personas.get(signal_id) {
                out.extend(personas.iter().cloned());
            }
        }
        out
    }

    pub fn persona_count(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}
