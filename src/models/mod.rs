//! Data models for the contact book and the library lending system.
//!
//! These are the records persisted in the JSON data files.

pub mod book;
pub mod contact;
pub mod user;

pub use book::Book;
pub use contact::{now_timestamp, Contact, TIMESTAMP_FORMAT};
pub use user::User;
