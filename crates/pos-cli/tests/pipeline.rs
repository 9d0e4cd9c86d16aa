//! Integration tests for the pipeline module.

use std::io::Write;

use pos_cli::pipeline::{ingest, output, transform};
use tempfile::NamedTempFile;

const HEADER: &str = "Timestamp,Orders,Cost,Location,Payment Type,Card Details\n";

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_end_to_end_csv_to_json() {
    let input = create_temp_csv(&format!(
        "{HEADER}\
         2023-06-01 08:05:00,\"Large,iced flavoured latte - vanilla,4.50,,hot chocolate,3.20\",7.70,Aberdeen,CARD,\"5244,Visa\"\n\
         2023-06-01 08:10:00,\",espresso,1.95\",1.95,Leith,CASH,None\n"
    ));

    let rows = ingest(input.path()).unwrap();
    assert_eq!(rows.len(), 2);

    let outcome = transform(&rows, false).unwrap();
    assert_eq!(outcome.transactions.len(), 2);
    assert!(outcome.failures.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("transactions.json");
    let written = output(&outcome.transactions, Some(&out_path), false).unwrap();
    assert_eq!(written.as_deref(), Some(out_path.as_path()));

    let json = std::fs::read_to_string(&out_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["basket"][0]["name"], "Latte");
    assert_eq!(records[0]["basket"][0]["flavour"], "Vanilla");
    assert_eq!(records[0]["basket"][0]["iced"], true);
    assert_eq!(records[0]["basket"][1]["name"], "Hot Chocolate");
    assert_eq!(records[0]["card_details"], "5244");
    assert_eq!(records[1]["payment_type"], "CASH");
    assert!(records[1]["card_details"].is_null());
    assert_ne!(records[0]["id"], records[1]["id"]);
}

#[test]
fn test_skip_policy_counts_failed_rows() {
    let input = create_temp_csv(&format!(
        "{HEADER}\
         2023-06-01 08:05:00,\"Large,latte,2.45\",2.45,Aberdeen,CARD,None\n\
         not-a-timestamp,\"Large,latte,2.45\",2.45,Aberdeen,CARD,None\n\
         2023-06-01 08:15:00,\"Large,latte,free\",0.00,Aberdeen,CARD,None\n"
    ));

    let rows = ingest(input.path()).unwrap();
    let outcome = transform(&rows, false).unwrap();

    assert_eq!(outcome.transactions.len(), 1);
    assert_eq!(outcome.failures.len(), 2);
    assert_eq!(outcome.failures[0].row, 2);
    assert_eq!(outcome.failures[1].row, 3);
}

#[test]
fn test_fail_fast_aborts_on_first_failure() {
    let input = create_temp_csv(&format!(
        "{HEADER}\
         not-a-timestamp,\"Large,latte,2.45\",2.45,Aberdeen,CARD,None\n\
         2023-06-01 08:15:00,\"Large,latte,2.45\",2.45,Aberdeen,CARD,None\n"
    ));

    let rows = ingest(input.path()).unwrap();
    let result = transform(&rows, true);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("row 1"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let input = create_temp_csv(&format!(
        "{HEADER}2023-06-01 08:05:00,\"Large,latte,2.45\",2.45,Aberdeen,CARD,None\n"
    ));
    let rows = ingest(input.path()).unwrap();
    let outcome = transform(&rows, false).unwrap();

    let written = output(&outcome.transactions, None, true).unwrap();
    assert!(written.is_none());
}

#[test]
fn test_ingest_missing_file_fails() {
    let result = ingest(std::path::Path::new("/nonexistent/export.csv"));
    assert!(result.is_err());
}
