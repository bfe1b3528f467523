use thiserror::Error;

/// Errors raised by the stroke engine.
///
/// None of these are fatal to the host: a failed load leaves the session
/// untouched and the caller decides whether to surface the problem.
#[derive(Debug, Error)]
pub enum DrawingError {
    /// A paint style or session setting was out of range.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Stored drawing data could not be decoded, e.g. an unknown command tag.
    #[error("Failed to deserialize drawing: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Drawing data could not be encoded.
    #[error("Failed to serialize drawing: {0}")]
    Serialization(String),

    /// A settings file could not be read.
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// A stroke index past the end of the history.
    #[error("Stroke index out of range: {index} (count: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for engine operations
pub type DrawingResult<T> = Result<T, DrawingError>;
