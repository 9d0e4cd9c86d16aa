//! Timestamp parsing for POS exports.
//!
//! The point-of-sale system writes local wall-clock timestamps in a single
//! fixed format with no zone designator. Conversion to epoch seconds uses
//! the local time zone of the machine running the transform, which means
//! the numeric output is environment-dependent; deployments that need
//! cross-machine reproducibility should pin a fixed offset here instead.

use chrono::{Local, LocalResult, NaiveDateTime, TimeZone};

use crate::error::{Result, TransformError};

/// The only timestamp format accepted from the source data.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a "YYYY-MM-DD HH:MM:SS" timestamp to epoch seconds, interpreting
/// the value in the local time zone.
///
/// Any deviation from the exact format is a hard failure. An ambiguous
/// local time (DST fall-back) resolves to the earlier instant; a
/// nonexistent one (DST spring-forward gap) is an error.
pub fn parse_local_epoch(value: &str) -> Result<i64> {
    let naive = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| {
        TransformError::InvalidTimestamp {
            value: value.to_string(),
            source,
        }
    })?;

    match Local.from_local_datetime(&naive) {
        LocalResult::Single(datetime) => Ok(datetime.timestamp()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.timestamp()),
        LocalResult::None => Err(TransformError::NonexistentTimestamp {
            value: value.to_string(),
        }),
    }
}
