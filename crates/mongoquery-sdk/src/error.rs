//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Evaluation error
    #[error("Match error: {0}")]
    MatchError(#[from] mongoquery_runtime::MatchError),

    /// JSON document or config could not be parsed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML document or config could not be parsed
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Builder finished without a query definition
    #[error("Query definition missing")]
    MissingDefinition,
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
