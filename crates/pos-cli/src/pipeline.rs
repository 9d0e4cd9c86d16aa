//! Batch processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the source CSV into typed rows
//! 2. **Transform**: Assemble each row into a normalized transaction
//! 3. **Output**: Serialize the batch to JSON
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. The transform stage owns the per-row failure policy the core
//! delegates to its caller: skip-and-log by default, abort on first
//! failure with `fail_fast`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info_span, warn};

use pos_ingest::{SourceRow, read_transactions_csv};
use pos_model::Transaction;
use pos_output::{transactions_to_json, write_transactions_json};
use pos_transform::assemble;

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Read the source CSV into rows, in file order.
pub fn ingest(path: &Path) -> Result<Vec<SourceRow>> {
    let span = info_span!("ingest", input = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let rows =
        read_transactions_csv(path).with_context(|| format!("read {}", path.display()))?;

    debug!(
        input = %path.display(),
        rows = rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(rows)
}

// ============================================================================
// Stage 2: Transform
// ============================================================================

/// Result of the transform stage.
#[derive(Debug)]
pub struct TransformOutcome {
    /// Successfully assembled transactions, in input row order.
    pub transactions: Vec<Transaction>,
    /// Rows that failed to assemble and were skipped.
    pub failures: Vec<RowFailure>,
}

/// One skipped source row.
#[derive(Debug)]
pub struct RowFailure {
    /// 1-based data row number (excluding the header).
    pub row: usize,
    pub message: String,
}

/// Assemble each row into a transaction.
///
/// With `fail_fast` the first row failure aborts the stage; otherwise the
/// failed row is logged at `warn`, recorded, and skipped.
pub fn transform(rows: &[SourceRow], fail_fast: bool) -> Result<TransformOutcome> {
    let span = info_span!("transform", rows = rows.len());
    let _guard = span.enter();
    let start = Instant::now();

    let mut transactions = Vec::with_capacity(rows.len());
    let mut failures = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;
        match assemble(row) {
            Ok(transaction) => transactions.push(transaction),
            Err(error) if fail_fast => {
                return Err(anyhow!(error).context(format!("row {row_number}")));
            }
            Err(error) => {
                warn!(row = row_number, %error, "skipping row");
                failures.push(RowFailure {
                    row: row_number,
                    message: error.to_string(),
                });
            }
        }
    }

    debug!(
        transactions = transactions.len(),
        skipped = failures.len(),
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );
    Ok(TransformOutcome {
        transactions,
        failures,
    })
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Write the batch as JSON to `path`, or to stdout when no path is given.
///
/// Returns the written path, if any. With `dry_run` nothing is written.
pub fn output(
    transactions: &[Transaction],
    path: Option<&Path>,
    dry_run: bool,
) -> Result<Option<PathBuf>> {
    let span = info_span!("output", transactions = transactions.len());
    let _guard = span.enter();

    if dry_run {
        debug!("dry run; skipping output");
        return Ok(None);
    }

    match path {
        Some(path) => {
            write_transactions_json(path, transactions)
                .with_context(|| format!("write {}", path.display()))?;
            Ok(Some(path.to_path_buf()))
        }
        None => {
            let json = transactions_to_json(transactions).context("serialize transactions")?;
            println!("{json}");
            Ok(None)
        }
    }
}
