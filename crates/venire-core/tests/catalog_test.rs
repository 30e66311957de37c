//! Catalog validation and serde shape for the authored types.

use venire_core::catalog::{
    Persona, PersonaCatalog, PersonaSignalWeight, Signal, SignalCategory, SignalValue, ValueKind,
};
use venire_core::errors::VenireError;

fn signal(id: &str) -> Signal {
    Signal {
        id: id.to_string(),
        display_name: id.to_string(),
        category: SignalCategory::Attitudinal,
        kind: ValueKind::Bool,
        allowed_values: Vec::new(),
        source_field: None,
        patterns: Vec::new(),
    }
}

fn persona(id: &str) -> Persona {
    Persona {
        id: id.to_string(),
        display_name: id.to_string(),
        family: "family".to_string(),
        reference_embedding: None,
        description: None,
    }
}

fn weight(persona_id: &str, signal_id: &str, w: f64) -> PersonaSignalWeight {
    PersonaSignalWeight {
        persona_id: persona_id.to_string(),
        signal_id: signal_id.to_string(),
        weight: w,
        expected: Some(SignalValue::Bool(true)),
    }
}

#[test]
fn valid_catalog_builds_with_indexes() {
    let catalog = PersonaCatalog::build(
        vec![signal("s1"), signal("s2")],
        vec![persona("a"), persona("b")],
        vec![weight("a", "s1", 0.5), weight("b", "s1", -0.5), weight("a", "s2", 0.2)],
    )
    .unwrap();

    assert_eq!(catalog.persona_count(), 2);
    assert_eq!(catalog.weights_for("a").len(), 2);
    assert_eq!(catalog.weights_for("b").len(), 1);

    let affected = catalog.personas_weighting(["s1"]);
    assert_eq!(affected.len(), 2);
    let affected = catalog.personas_weighting(["s2"]);
    assert!(affected.contains("a") && affected.len() == 1);
}

#[test]
fn duplicate_persona_id_is_rejected() {
    let result = PersonaCatalog::build(
        vec![signal("s1")],
        vec![persona("a"), persona("a")],
        Vec::new(),
    );
    assert!(matches!(result, Err(VenireError::Catalog(_))));
}

#[test]
fn duplicate_signal_id_is_rejected() {
    let result = PersonaCatalog::build(
        vec![signal("s1"), signal("s1")],
        vec![persona("a")],
        Vec::new(),
    );
    assert!(matches!(result, Err(VenireError::Catalog(_))));
}

#[test]
fn out_of_range_weight_is_rejected() {
    let result = PersonaCatalog::build(
        vec![signal("s1")],
        vec![persona("a")],
        vec![weight("a", "s1", 1.5)],
    );
    assert!(matches!(result, Err(VenireError::Catalog(_))));
}

#[test]
fn weight_for_unknown_signal_is_dropped_not_fatal() {
    let catalog = PersonaCatalog::build(
        vec![signal("s1")],
        vec![persona("a")],
        vec![weight("a", "s1", 0.5), weight("a", "ghost_signal", 0.9)],
    )
    .unwrap();
    assert_eq!(catalog.weights_for("a").len(), 1);
    assert!(catalog.personas_weighting(["ghost_signal"]).is_empty());
}

#[test]
fn weight_for_unknown_persona_is_dropped_not_fatal() {
    let catalog = PersonaCatalog::build(
        vec![signal("s1")],
        vec![persona("a")],
        vec![weight("ghost", "s1", 0.5)],
    )
    .unwrap();
    assert!(catalog.weights_for("ghost").is_empty());
    assert!(catalog.personas_weighting(["s1"]).is_empty());
}

#[test]
fn signal_value_serde_is_tagged() {
    let value = SignalValue::Categorical("public".to_string());
    let json = serde_json::to_string(&value).unwrap();
    assert!(json.contains("categorical"), "{json}");
    let back: SignalValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}
