use thiserror::Error;

/// Failures reported on the JSON boundary. The similarity computation itself
/// cannot fail.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("empty input")]
    EmptyInput,
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("request must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("`pairs` must be an array, got {0}")]
    PairsNotArray(&'static str),
    #[error("pair {index} must be an object, got {found}")]
    PairNotObject { index: usize, found: &'static str },
    #[error("`{field}` must be an array, got {found}")]
    SetNotArray {
        field: &'static str,
        found: &'static str,
    },
}

impl RequestError {
    pub fn kind(&self) -> &'static str {
        match self {
            RequestError::EmptyInput => "empty_input",
            RequestError::InvalidUtf8(_)
            | RequestError::InvalidJson(_)
            | RequestError::NotAnObject(_)
            | RequestError::PairsNotArray(_)
            | RequestError::PairNotObject { .. }
            | RequestError::SetNotArray { .. } => "exception",
        }
    }

    /// Human-readable detail; absent for empty input.
    pub fn message(&self) -> Option<String> {
        match self {
            RequestError::EmptyInput => None,
            other => Some(other.to_string()),
        }
    }
}
