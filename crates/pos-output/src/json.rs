//! JSON serialization of transaction batches.

use std::fs;
use std::path::Path;

use pos_model::Transaction;

use crate::error::{OutputError, Result};

/// Serializes a transaction batch to a pretty-printed JSON array.
///
/// Absent card details serialize as `null`.
pub fn transactions_to_json(transactions: &[Transaction]) -> Result<String> {
    serde_json::to_string_pretty(transactions)
        .map_err(|source| OutputError::Serialize { source })
}

/// Writes a transaction batch to `path` as JSON.
pub fn write_transactions_json(path: &Path, transactions: &[Transaction]) -> Result<()> {
    let json = transactions_to_json(transactions)?;
    fs::write(path, json).map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        transactions = transactions.len(),
        "wrote transaction batch"
    );
    Ok(())
}
