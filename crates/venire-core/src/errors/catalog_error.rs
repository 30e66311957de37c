/// Persona/signal catalog validation errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{entity} with empty id")]
    EmptyId { entity: &'static str },

    #[error("duplicate signal id: {id}")]
    DuplicateSignal { id: String },

    #[error("duplicate persona id: {id}")]
    DuplicatePersona { id: String },

    #[error("weight {weight} for ({persona_id}, {signal_id}) outside [-1, 1]")]
    WeightOutOfRange {
        persona_id: String,
        signal_id: String,
        weight: f64,
    },

    #[error("persona catalog has no personas")]
    NoPersonas,
}
