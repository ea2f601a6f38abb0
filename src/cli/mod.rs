//! Command-line front ends.
//!
//! The clap definitions and command runners live here; the binaries only
//! load configuration, set up logging, wire repositories, and map the
//! outcome to an exit code. Runners write to caller-supplied streams so
//! they can be exercised in tests.

pub mod contact;
pub mod library;

pub use contact::{run_contact_command, ContactCli, ContactCommand};
pub use library::{run_library_command, LibraryCli, LibraryCommand};
