//! Map document error types.

use std::fmt;

/// Errors from ingesting an uploaded map document.
#[derive(Debug)]
pub enum MapError {
    /// JSON deserialization failed (malformed document, missing
    /// `stations`/`lines` keys, or wrongly-typed fields)
    Json { message: String },

    /// The upload contained no bytes at all
    Empty,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Json { message } => write!(f, "invalid map document: {message}"),
            MapError::Empty => write!(f, "empty upload"),
        }
    }
}

impl std::error::Error for MapError {}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        MapError::Json {
            message: err.to_string(),
        }
    }
}
