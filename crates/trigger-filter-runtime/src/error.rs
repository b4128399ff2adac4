//! Runtime error types

use thiserror::Error;
use trigger_filter_core::ValueKind;

/// Runtime error type
///
/// Evaluation itself never fails; these errors come from building contexts.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Event payload value cannot be read as the attribute's kind
    #[error("Invalid value for attribute '{attribute}' of kind {kind}: {reason}")]
    InvalidContextValue {
        attribute: String,
        kind: ValueKind,
        reason: String,
    },

    /// Event payload is not a JSON object
    #[error("Invalid event payload: {0}")]
    InvalidPayload(String),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
