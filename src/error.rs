//! Custom error types for pavati-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for pavati-cli operations
#[derive(Error, Debug)]
pub enum PavatiError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for the current receipt draft
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Receipt lookup errors
    #[error("Receipt not found: {0}")]
    NotFound(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

/// Validation failures that block saving a receipt draft
///
/// Checks run in declaration order and the first violation wins; the draft
/// and the ledger are left untouched on failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The member name is blank after trimming
    #[error("A name is required on the receipt")]
    EmptyName,

    /// The receipt total is zero or negative
    #[error("The receipt total must be greater than zero")]
    NonPositiveTotal,
}

impl PavatiError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PavatiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PavatiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for pavati-cli operations
pub type PavatiResult<T> = Result<T, PavatiError>;
