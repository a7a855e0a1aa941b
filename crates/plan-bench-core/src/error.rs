use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanBenchError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Dataset error: {0}")]
    DatasetError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PlanBenchError {
    fn from(e: serde_json::Error) -> Self {
        PlanBenchError::SerializationError(e.to_string())
    }
}
