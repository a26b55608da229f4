//! Error types for zbprint-core



/// Result type alias for zbprint-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Agent response parsing errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Status reply is shorter than the status layout requires
    #[error("Status response too short: expected at least {expected} characters, got {actual}")]
    ResponseTooShort {
        expected: usize,
        actual: usize,
    },

    /// Agent answered with an empty body
    #[error("Empty response from agent")]
    EmptyResponse,

    /// `default` reply has the wrong number of fields
    #[error("Unexpected field count: expected {expected}, got {actual}")]
    FieldCount {
        expected: usize,
        actual: usize,
    },

    /// `default` reply field has no `key: value` separator
    #[error("Field {index} has no value")]
    MissingFieldValue {
        index: usize,
    },

    /// Response body is not valid JSON, or a descriptor does not match
    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if the agent answered but the answer carries no printer
    pub fn is_empty_result(&self) -> bool {
        matches!(
            self,
            Self::EmptyResponse
                | Self::FieldCount { .. }
                | Self::MissingFieldValue { .. }
        )
    }
}
