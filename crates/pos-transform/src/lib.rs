//! POS transaction normalization.
//!
//! This crate is the core of the pipeline: it converts raw source rows
//! into normalized [`pos_model::Transaction`] records.
//!
//! # Overview
//!
//! - **Basket parsing**: the flat comma-delimited "Orders" token stream is
//!   consumed in `[size, name, price]` triples and normalized into
//!   structured product entries (title-cased names, extracted flavours,
//!   marker substrings lifted into fields).
//! - **Assembly**: each row becomes one transaction with a fresh
//!   identifier, an epoch-seconds timestamp, and cleaned payment fields.
//!
//! # Design Principles
//!
//! - **Stateless functions**: pure transforms, no I/O, no shared state
//! - **Hard failures propagate**: malformed prices and timestamps abort
//!   the row; the caller decides whether to skip or abort the batch

mod assembler;
mod basket;
mod datetime;
mod error;

pub mod text;

// Core operations
pub use assembler::{assemble, assemble_all};
pub use basket::parse_basket;
pub use datetime::{TIMESTAMP_FORMAT, parse_local_epoch};

// Error type
pub use error::{Result, TransformError};
