//! JSON file persistence.
//!
//! Every data file is a single JSON array of records. Loading reads the
//! whole array into memory, saving rewrites the whole file; there is no
//! incremental update.

mod json_file;

pub use json_file::{load_records, save_records, JsonFile};
