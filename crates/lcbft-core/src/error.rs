use thiserror::Error;

#[derive(Debug, Error)]
pub enum LcbftError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Payload too large: {size} bytes (limit {limit})")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Malformed JSON: {0}")]
    MalformedInput(String),

    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    #[error("Payload matches no known export format")]
    UnrecognizedFormat,

    #[error("Invalid file metadata: {0}")]
    InvalidFileMetadata(String),
}

impl From<serde_json::Error> for LcbftError {
    fn from(e: serde_json::Error) -> Self {
        LcbftError::MalformedInput(e.to_string())
    }
}
