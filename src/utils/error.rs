use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Expression error: {message}")]
    ExpressionError { message: String },
}

impl DemoError {
    pub(crate) fn expression(message: impl Into<String>) -> Self {
        DemoError::ExpressionError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
