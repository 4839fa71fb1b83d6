//! Error types for bionic operations.
//!
//! The transform itself is total and never fails; these errors come from the
//! layers around it (reading input, loading configuration, editing fields).

use thiserror::Error;

/// Errors that can occur while configuring or driving a transform.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown style field: {0}")]
    UnknownField(String),

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Expected FIELD=VALUE, got {0:?}")]
    InvalidOverride(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
