//! Observability: structured logging setup.
//!
//! Log records go to stderr and are appended to a log file, so a run's
//! history survives after the terminal is closed.

pub mod logging;

pub use logging::{filter_directive, init_logging};
