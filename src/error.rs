//! Error types for usagewire

use thiserror::Error;

/// Result type alias for usagewire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Enum(#[from] EnumError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// Hard decode failures.
///
/// Unknown enum values and nested records that cannot be typed are not errors:
/// they downgrade the record to its raw form instead.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("missing required field `{0}`")]
    MissingRequiredField(&'static str),

    #[error("invalid type for required field `{field}`: expected {expected}, found {found}")]
    InvalidRequiredField {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Enum membership errors
#[derive(Debug, Error)]
pub enum EnumError {
    #[error("invalid value `{value}` for {name}: expected one of {}", .allowed.join(", "))]
    InvalidValue {
        name: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
