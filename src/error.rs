//! Error types for the contact registry.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// An equivalent contact is already in the collection.
///
/// This is the only way inserting into a collection can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("This contact already exists in the registry: {0}")]
pub struct DuplicateRecordError(pub String);

/// Errors raised by the in-memory registry and its collections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// An equivalent contact is already in the collection
    #[error(transparent)]
    DuplicateRecord(#[from] DuplicateRecordError),

    /// The contact to remove is not in the collection
    #[error("Contact could not be found in the registry: {0}")]
    RecordNotFound(String),

    /// The tag is already in the tag set
    #[error("Tag already present: {0}")]
    DuplicateTag(String),
}

/// Errors that can occur when binding, loading or saving a storage file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No path was supplied
    #[error("Storage file path cannot be empty")]
    EmptyPath,

    /// The path does not carry an accepted file-name suffix
    #[error("Invalid storage file path: {0}")]
    InvalidPath(ValidationError),

    /// The file is missing, unreadable, or its content is not a valid registry
    #[error("Storage operation failed for {}: {reason}", .path.display())]
    Operation { path: PathBuf, reason: String },

    /// Writing the file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub(crate) fn operation(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Operation {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
