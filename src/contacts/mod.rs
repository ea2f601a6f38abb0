//! Contact list operations.
//!
//! Pure functions over an in-memory list of contacts. They never touch the
//! disk; callers load the list, apply one of these, and save the result.

mod operations;

pub use operations::{
    add_contact, contains_contact, delete_contact, find_contact, push_contact, NewContact,
};
