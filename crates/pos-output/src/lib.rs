//! POS output generation library.
//!
//! This crate serializes normalized transaction batches for downstream
//! analytics consumers. The only supported format is a JSON array of
//! transaction records; the persistence layout beyond that is left to the
//! caller.

mod error;
mod json;

// Re-export public types and functions
pub use error::{OutputError, Result};
pub use json::{transactions_to_json, write_transactions_json};
