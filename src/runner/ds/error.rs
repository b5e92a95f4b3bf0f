use thiserror::Error;

/// Payload of an in-band error value. Evaluation never aborts on these; they
/// travel through expressions like any other value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JErrorType {
    #[error("ReferenceError: {0}")]
    ReferenceError(String),
    #[error("TypeError: {0}")]
    TypeError(String),
    #[error("RangeError: {0}")]
    RangeError(String),
}
