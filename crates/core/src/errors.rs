//! Core error types for the Pamoja application.
//!
//! This module defines storage-agnostic error types. Store-specific
//! failures (file I/O, serialization) are converted to these types by the
//! storage layer.

use chrono::{DateTime, ParseError as ChronoParseError, Utc};
use thiserror::Error;

use crate::payments::PaymentError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the group-savings application.
#[derive(Error, Debug)]
pub enum Error {
    /// The one login failure the caller is expected to branch on: no user
    /// with this email exists in the chosen group and no registration
    /// context (name or freshly founded group) was supplied.
    #[error("No member with email '{email}' is registered in group '{group_id}'")]
    MemberNotFound { email: String, group_id: String },

    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The savings target was edited less than the cooldown interval ago.
    #[error("Savings target is locked for editing until {unlocks_at}")]
    TargetEditLocked { unlocks_at: DateTime<Utc> },

    #[error("Payment operation failed: {0}")]
    Payment(#[from] PaymentError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for persistence operations.
///
/// Uses `String` for all error details so the storage layer can convert
/// backend-specific errors into this format.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading from or writing to the underlying store failed.
    #[error("Store I/O failed: {0}")]
    Io(String),

    /// A slice could not be serialized or deserialized.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(StorageError::Serialization(err.to_string()))
    }
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
