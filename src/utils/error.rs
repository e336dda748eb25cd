use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("QR encoding failed: {0}")]
    QrError(#[from] qrcode::types::QrError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to persist output file: {0}")]
    PersistError(#[from] tempfile::PersistError),

    #[error("Configuration error for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
