//! Error types for the contact book and library system.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a JSON data file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading, writing, or creating the data directory failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not a valid JSON array of records
    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur in contact book operations.
#[derive(Error, Debug)]
pub enum ContactError {
    /// Name, phone, or email failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact with this name exists
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The contact file could not be loaded or saved
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur in library lending operations.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// A required field was blank
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A book with this ISBN is already catalogued
    #[error("Book already exists: {0}")]
    DuplicateBook(String),

    /// No book with this ISBN
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// No user with this id
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The book is lent to someone already
    #[error("Book {isbn} is already borrowed by {borrower}")]
    AlreadyBorrowed { isbn: String, borrower: String },

    /// Tried to return a book that is on the shelf
    #[error("Book {0} is not borrowed")]
    NotBorrowed(String),

    /// The books or users file could not be loaded or saved
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with LibraryError
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
