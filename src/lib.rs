//! Contact Book - a JSON-backed contact manager and a small library lending system.
//!
//! The contact book keeps contacts (name, mobile number, optional email,
//! creation time) in a single JSON file. The library system catalogues
//! books, lends them to users, and exposes the same operations over a
//! minimal REST API.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, email)
//! - **models**: Records persisted in the JSON files
//! - **contacts**: Pure list operations on contacts
//! - **storage**: Whole-file JSON load/save
//! - **repositories**: Storage traits with JSON and in-memory implementations
//! - **services**: Business logic for contacts and lending
//! - **matching**: Fuzzy "did you mean" name suggestions
//! - **server**: REST API for the library
//! - **cli**: Command definitions and runners for both binaries
//! - **config** / **observability**: Environment configuration and logging

pub mod cli;
pub mod config;
pub mod contacts;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod server;
pub mod services;
pub mod storage;

pub use config::Config;
pub use error::{ConfigError, ContactError, LibraryError, StorageError};
pub use matching::{ContactMatcher, Suggestion};
pub use models::{Book, Contact, User};
pub use services::{ContactService, ContactServiceImpl, LibraryService, LibraryServiceImpl};
