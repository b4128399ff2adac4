//! Error types for Trigger Filter Core

use crate::types::{ComparatorKind, ValueKind};
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// A persisted tree does not match the wire format
    #[error("Malformed serialized tree: {0}")]
    MalformedSerializedTree(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::MalformedSerializedTree(err.to_string())
    }
}

/// Raised while constructing or editing a tree, never during evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Comparator not legal for the attribute's kind
    #[error("Comparator '{comparator}' is not allowed for attribute '{attribute}' of kind {kind}")]
    IllegalComparator {
        attribute: String,
        kind: ValueKind,
        comparator: ComparatorKind,
    },

    /// Rule value does not fit the attribute's kind
    #[error("Value for attribute '{attribute}' does not fit kind {kind}: {value}")]
    ValueKindMismatch {
        attribute: String,
        kind: ValueKind,
        value: String,
    },

    /// Rule was built for a different kind than the registry reports
    #[error("Attribute '{attribute}' is registered as {registered}, rule was built as {actual}")]
    KindMismatch {
        attribute: String,
        registered: ValueKind,
        actual: ValueKind,
    },

    #[error("Attribute '{attribute}' has a non-finite number")]
    NonFiniteNumber { attribute: String },

    /// Includes literal is not a comma separated list of entries
    #[error("Malformed includes list for attribute '{attribute}': {reason}")]
    MalformedIncludes { attribute: String, reason: String },

    /// Placeholder group slot rejected by the configured policy
    #[error("Unconfigured group at item {index}")]
    UnconfiguredGroup { index: usize },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
