//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Statement segmentation found no date anchors in the pasted text
    #[error("No dates found. Ensure the pasted statement text includes dates like 28-11-2025")]
    NoDatesFound,

    /// Segmentation produced blocks but none yielded a usable transaction
    #[error("No usable transactions could be extracted from the pasted text")]
    NoUsableCandidates,

    /// A data file failed to parse as JSON at all; no state was changed
    #[error("Malformed import file: {0}")]
    MalformedImportFile(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetError {
    /// Create a "not found" error for spending sources
    pub fn source_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Source",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for sub-categories
    pub fn sub_category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Sub-category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for pending import items
    pub fn pending_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Pending transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the user can recover by editing their input and retrying
    /// (no state was mutated)
    pub fn is_recoverable_input(&self) -> bool {
        matches!(
            self,
            Self::NoDatesFound | Self::NoUsableCandidates | Self::MalformedImportFile(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
