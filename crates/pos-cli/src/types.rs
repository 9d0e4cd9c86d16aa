use std::path::PathBuf;

use pos_cli::pipeline::RowFailure;

/// Result of one normalization run, used for the summary and exit code.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub rows_read: usize,
    pub transactions: usize,
    pub basket_items: usize,
    pub failures: Vec<RowFailure>,
    pub dry_run: bool,
}

impl RunResult {
    /// True when any source row failed to normalize.
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }
}
