//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names, phone numbers, and email
//! addresses. Each one validates at construction time, so a value of the
//! type is always well-formed.

pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use name::{is_valid_name, ContactName};
pub use phone::{is_valid_phone, PhoneNumber};
