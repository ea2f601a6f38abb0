//! Fuzzy name matching for contact lookups.
//!
//! Exact lookups (`find`) are case-sensitive and whole-name; this module
//! ranks near misses so the CLI can offer "did you mean" hints.

pub mod name_matcher;

pub use name_matcher::{ContactMatcher, Suggestion};
