use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Error type that captures failures outside of field validation.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown field `{0}`")]
    UnknownField(String),
    #[error("Unknown mode `{0}`")]
    UnknownMode(String),
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}
