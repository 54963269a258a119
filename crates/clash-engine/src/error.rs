//! Error types for clash-engine operations.
//!
//! Only the JSON boundary can fail. Detection, time parsing and reporting are
//! total and never return these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClashError {
    /// The input was not valid JSON, or not the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed JSON whose top-level shape is not one the parser accepts.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ClashError>;
