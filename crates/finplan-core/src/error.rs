use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A result does not fit in a 96-bit decimal (extreme rate or horizon).
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

impl From<serde_json::Error> for PlannerError {
    fn from(e: serde_json::Error) -> Self {
        PlannerError::SerializationError(e.to_string())
    }
}

impl From<chrono::ParseError> for PlannerError {
    fn from(e: chrono::ParseError) -> Self {
        PlannerError::DateError(e.to_string())
    }
}
