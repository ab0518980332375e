//! Error types for results storage.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}

pub type ResultsResult<T> = Result<T, ResultsError>;
