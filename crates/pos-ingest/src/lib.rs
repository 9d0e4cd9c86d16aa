//! POS data ingestion utilities.
//!
//! This crate reads point-of-sale transaction exports (CSV files with a
//! header row) into typed [`SourceRow`] records for the transform stage.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pos_ingest::read_transactions_csv;
//!
//! let rows = read_transactions_csv(Path::new("exports/2023-06.csv"))?;
//! ```

mod error;
mod reader;
mod row;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{read_transactions_csv, read_transactions_reader};

// === Row Types ===
pub use row::SourceRow;
