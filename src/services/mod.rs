//! Application service layer.
//!
//! Services contain business logic and orchestrate the repositories. They
//! provide a clean boundary between the front ends (CLIs, REST API) and the
//! data access layer.

mod contact_service;
mod library_service;

pub use contact_service::{ContactService, ContactServiceImpl};
pub use library_service::{
    LibraryService, LibraryServiceImpl, DEFAULT_USER_ID, DEFAULT_USER_NAME,
};
