//! Error types for the text-parsing entry points.
//!
//! Composition itself never fails; only the adapters that turn text into
//! [`ClassValue`](crate::ClassValue) trees can.

use thiserror::Error;

/// Errors that can occur while reading class values from text.
#[derive(Error, Debug)]
pub enum SesegError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The input was well-formed but not usable as class values
    /// (e.g., an argument list that is not a JSON array).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout seseg-core.
pub type Result<T> = std::result::Result<T, SesegError>;
