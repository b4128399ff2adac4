//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No registry is configured for the scope
    #[error("Unknown scope: {0}")]
    UnknownScope(String),

    #[error("Core error: {0}")]
    Core(#[from] trigger_filter_core::CoreError),

    #[error("Validation error: {0}")]
    Validation(#[from] trigger_filter_core::ValidationError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] trigger_filter_runtime::RuntimeError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
