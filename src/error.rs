//! Error handling types for semantic-highlight
//!
//! This module provides the error taxonomy surfaced by highlight requests.

use thiserror::Error;

/// Error type for highlight operations
#[derive(Debug, Error)]
pub enum HighlightError {
    /// The requested file has no loaded buffer
    #[error("File not found: {file_name}")]
    FileNotFound { file_name: String },

    /// The front-end reported a classification label with no output category
    #[error("Unmapped classification: {label}")]
    UnmappedCategory { label: String },

    /// A raw token lies outside the buffer or has an inverted range
    #[error("Token range {start}..{end} is outside the buffer (length {len})")]
    TokenOutOfBounds { start: u32, end: u32, len: u32 },

    /// Configuration error
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding of requests or classification forests failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for highlight operations
pub type HighlightResult<T> = Result<T, HighlightError>;

/// Helper functions for common error patterns
impl HighlightError {
    /// Create a file not found error
    pub fn file_not_found(file_name: impl Into<String>) -> Self {
        HighlightError::FileNotFound {
            file_name: file_name.into(),
        }
    }

    /// Create an unmapped category error
    pub fn unmapped_category(label: impl Into<String>) -> Self {
        HighlightError::UnmappedCategory {
            label: label.into(),
        }
    }

    /// Create a token out of bounds error
    pub fn token_out_of_bounds(start: u32, end: u32, len: u32) -> Self {
        HighlightError::TokenOutOfBounds { start, end, len }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        HighlightError::Config {
            message: message.into(),
        }
    }
}
