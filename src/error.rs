//! Error types for the auction scout CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoutError>;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("row {row}: missing required column '{column}'")]
    MissingColumn { row: usize, column: &'static str },

    #[error("row {row}: column '{column}' expected {expected} value, got {value}")]
    TypeConversion {
        row: usize,
        column: String,
        expected: &'static str,
        value: String,
    },

    #[error("invalid skill rating '{value}': must be an integer from 1 to 10")]
    InvalidRating { value: String },

    #[error("unknown auction status '{value}'")]
    InvalidStatus { value: String },
}
