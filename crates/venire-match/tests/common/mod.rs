//! Shared fixtures: a small but realistic catalog of signals and
//! personas, plus repository/engine constructors.
#![allow(dead_code)]

use std::sync::Arc;

use venire_core::catalog::{
    Persona, PersonaCatalog, PersonaSignalWeight, Signal, SignalCategory, SignalValue, ValueKind,
};
use venire_core::traits::IEmbeddingProvider;
use venire_match::{MatchEngine, MemoryRepository, TermVectorProvider};

pub fn signal(
    id: &str,
    kind: ValueKind,
    category: SignalCategory,
    source_field: Option<&str>,
    patterns: &[&str],
) -> Signal {
    Signal {
        id: id.to_string(),
        display_name: id.replace('_', " "),
        category,
        kind,
        allowed_values: Vec::new(),
        source_field: source_field.map(String::from),
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn weight(persona: &str, signal: &str, w: f64, expected: Option<SignalValue>) -> PersonaSignalWeight {
    PersonaSignalWeight {
        persona_id: persona.to_string(),
        signal_id: signal.to_string(),
        weight: w,
        expected,
    }
}

fn persona(id: &str, family: &str, description: &str) -> Persona {
    let embedding = TermVectorProvider::default()
        .embed(description)
        .expect("term vector embedding");
    Persona {
        id: id.to_string(),
        display_name: id.replace('_', " "),
        family: family.to_string(),
        reference_embedding: Some(embedding),
        description: Some(description.to_string()),
    }
}

/// Three personas over six signals; two personas take opposed positions
/// on the same attitudinal signals.
pub fn fixture_catalog() -> PersonaCatalog {
    let mut employment = signal(
        "employment_sector",
        ValueKind::Categorical,
        SignalCategory::Demographic,
        Some("employment_sector"),
        &[],
    );
    employment.allowed_values = vec![
        "public".to_string(),
        "private".to_string(),
        "self_employed".to_string(),
    ];

    let signals = vec![
        signal(
            "distrusts_corporations",
            ValueKind::Bool,
            SignalCategory::Attitudinal,
            None,
            &[
                r"distrust\w*\s+(of\s+)?(large\s+)?corporation",
                r"big\s+business",
                r"corporations?\s+(lie|cheat|cut\s+corners)",
            ],
        ),
        signal(
            "trusts_experts",
            ValueKind::Bool,
            SignalCategory::Attitudinal,
            None,
            &[r"trust\w*\s+(the\s+)?expert", r"scientists?\s+know"],
        ),
        employment,
        signal(
            "age",
            ValueKind::Numeric,
            SignalCategory::Demographic,
            Some("age"),
            &[],
        ),
        signal(
            "prior_jury_service",
            ValueKind::Bool,
            SignalCategory::Experiential,
            Some("prior_jury_service"),
            &[r"served\s+on\s+a\s+jury"],
        ),
        signal(
            "hobbies",
            ValueKind::Text,
            SignalCategory::Linguistic,
            Some("hobbies"),
            &[],
        ),
    ];

    let personas = vec![
        persona(
            "skeptical_activist",
            "plaintiff_leaning",
            "distrusts corporations and big business, union organizer, skeptical of company experts",
        ),
        persona(
            "corporate_defender",
            "defense_leaning",
            "trusts corporate experts and industry, believes business acts responsibly",
        ),
        persona(
            "neutral_observer",
            "balanced",
            "follows instructions carefully, prior jury service, weighs evidence evenly",
        ),
    ];

    let weights = vec![
        weight(
            "skeptical_activist",
            "distrusts_corporations",
            0.8,
            Some(SignalValue::Bool(true)),
        ),
        weight(
            "skeptical_activist",
            "trusts_experts",
            -0.4,
            Some(SignalValue::Bool(true)),
        ),
        weight(
            "skeptical_activist",
            "employment_sector",
            0.3,
            Some(SignalValue::Categorical("public".to_string())),
        ),
        weight(
            "corporate_defender",
            "distrusts_corporations",
            -0.8,
            Some(SignalValue::Bool(true)),
        ),
        weight(
            "corporate_defender",
            "trusts_experts",
            0.6,
            Some(SignalValue::Bool(true)),
        ),
        weight(
            "neutral_observer",
            "prior_jury_service",
            0.2,
            Some(SignalValue::Bool(true)),
        ),
        weight(
            "neutral_observer",
            "age",
            0.1,
            Some(SignalValue::Numeric(45.0)),
        ),
    ];

    PersonaCatalog::build(signals, personas, weights).expect("fixture catalog is valid")
}

pub fn fixture_repository() -> Arc<MemoryRepository> {
    let repository = Arc::new(MemoryRepository::new());
    repository.set_catalog(fixture_catalog());
    repository
}

pub fn fixture_engine() -> (MatchEngine, Arc<MemoryRepository>) {
    let repository = fixture_repository();
    let engine = MatchEngine::new(repository.clone());
    (engine, repository)
}
