use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info_span};

use pos_cli::pipeline::{TransformOutcome, ingest, output, transform};
use pos_model::Transaction;

use crate::cli::Cli;
use crate::types::RunResult;

/// Run the full normalization pipeline for one CSV export.
pub fn run_transform(args: &Cli) -> Result<RunResult> {
    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let rows = ingest(&args.input)?;
    let rows_read = rows.len();

    let TransformOutcome {
        transactions,
        failures,
    } = transform(&rows, args.fail_fast)?;

    let written = output(&transactions, args.output.as_deref(), args.dry_run)?;

    debug!(
        rows = rows_read,
        transactions = transactions.len(),
        skipped = failures.len(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        input: args.input.clone(),
        output: written,
        rows_read,
        transactions: transactions.len(),
        basket_items: transactions.iter().map(Transaction::item_count).sum(),
        failures,
        dry_run: args.dry_run,
    })
}
