//! CSV reading for POS transaction exports.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, Result};
use crate::row::SourceRow;

/// Reads a transaction CSV file into typed rows, preserving file order.
///
/// The file must carry a header row with the exact field names "Orders",
/// "Card Details", "Timestamp", "Location", "Payment Type", and "Cost".
/// A file with a header but no data rows yields an empty batch.
pub fn read_transactions_csv(path: &Path) -> Result<Vec<SourceRow>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_transactions_reader(file, path)
}

/// Reads transaction rows from any reader.
///
/// `path` is used for error context only.
pub fn read_transactions_reader<R: Read>(reader: R, path: &Path) -> Result<Vec<SourceRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, record) in csv_reader.deserialize::<SourceRow>().enumerate() {
        let row = record.map_err(|e| row_error(e, path, index))?;
        rows.push(row);
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "read transaction rows");
    Ok(rows)
}

/// Maps a csv-crate error to the matching ingest variant.
///
/// Deserialization errors (a row missing an expected field, or a header
/// mismatch) become `RowParse`; structural errors become `CsvParse`.
fn row_error(error: csv::Error, path: &Path, index: usize) -> IngestError {
    match error.kind() {
        csv::ErrorKind::Deserialize { .. } => IngestError::RowParse {
            path: path.to_path_buf(),
            message: format!("row {}: {error}", index + 1),
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        },
    }
}
