//! Error types for the contact book.
//!
//! Field validation failures live in [`crate::domain::ValidationError`]; the
//! enums here cover everything above the field level.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by contact book operations.
///
/// Every variant is recoverable: the command layer turns it into a message
/// for the user and the session continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A name, phone, birthday or page size failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The contact does not exist in the directory
    #[error("Can not find contact!")]
    ContactNotFound(String),

    /// The record has no such phone number
    #[error("Phone number does not exist!")]
    PhoneNotFound(String),

    /// The command was invoked with too few arguments
    #[error("Missing required parameters!")]
    MissingArguments,
}

/// Errors that can occur while loading or saving the snapshot file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Errors returned by service operations that touch storage.
///
/// `Book` errors are reported to the user; `Storage` errors end the session.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The operation itself was rejected
    #[error(transparent)]
    Book(#[from] BookError),

    /// The snapshot could not be written
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        Self::Book(err.into())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
