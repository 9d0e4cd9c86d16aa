//! Row-to-transaction assembly.

use pos_ingest::SourceRow;
use pos_model::{Transaction, TransactionId};

use crate::basket::parse_basket;
use crate::datetime::parse_local_epoch;
use crate::error::Result;

/// Assembles one normalized transaction from a source row.
///
/// Splits the order field into tokens for the basket parser, normalizes
/// the timestamp and card details, generates a fresh identifier, and
/// copies the remaining fields verbatim. Performs no I/O and does not
/// mutate the input.
pub fn assemble(row: &SourceRow) -> Result<Transaction> {
    let tokens: Vec<&str> = row.orders.split(',').collect();
    let basket = parse_basket(&tokens)?;
    let datetime = parse_local_epoch(&row.timestamp)?;

    Ok(Transaction {
        id: TransactionId::new(),
        basket,
        datetime,
        location: row.location.clone(),
        payment_type: row.payment_type.clone(),
        transaction_total: row.cost.clone(),
        card_details: normalize_card_details(&row.card_details),
    })
}

/// Assembles a whole batch, propagating the first row failure.
///
/// Output order matches input row order. Callers that prefer to skip
/// failed rows should iterate with [`assemble`] instead.
pub fn assemble_all(rows: &[SourceRow]) -> Result<Vec<Transaction>> {
    rows.iter().map(assemble).collect()
}

/// Keeps the first comma-separated segment of the raw card details and
/// maps the literal text "None" to the absent marker.
fn normalize_card_details(raw: &str) -> Option<String> {
    let first = match raw.split_once(',') {
        Some((first, _)) => first,
        None => raw,
    };
    if first == "None" {
        None
    } else {
        Some(first.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_row() -> SourceRow {
        SourceRow {
            orders: "Large,latte,2.45,,iced mocha - orange,3.45".to_string(),
            card_details: "5244,Visa".to_string(),
            timestamp: "2023-06-01 14:30:00".to_string(),
            location: "Aberdeen".to_string(),
            payment_type: "CARD".to_string(),
            cost: "5.90".to_string(),
        }
    }

    #[test]
    fn test_assemble_basic_row() {
        let transaction = assemble(&test_row()).unwrap();
        assert_eq!(transaction.basket.len(), 2);
        assert_eq!(transaction.basket[0].name, "Latte");
        assert_eq!(transaction.basket[1].name, "Mocha");
        assert!(transaction.basket[1].iced);
        assert_eq!(transaction.basket[1].flavour, "Orange");
        assert_eq!(transaction.location, "Aberdeen");
        assert_eq!(transaction.payment_type, "CARD");
        assert_eq!(transaction.transaction_total, "5.90");
        assert_eq!(transaction.card_details.as_deref(), Some("5244"));
    }

    #[test]
    fn test_card_details_first_segment_kept() {
        let mut row = test_row();
        row.card_details = "4111,XXXX".to_string();
        let transaction = assemble(&row).unwrap();
        assert_eq!(transaction.card_details.as_deref(), Some("4111"));
    }

    #[test]
    fn test_card_details_none_maps_to_absent() {
        let mut row = test_row();
        row.card_details = "None,XXXX".to_string();
        let transaction = assemble(&row).unwrap();
        assert_eq!(transaction.card_details, None);

        row.card_details = "None".to_string();
        let transaction = assemble(&row).unwrap();
        assert_eq!(transaction.card_details, None);
    }

    #[test]
    fn test_ids_unique_across_batch() {
        let rows = vec![test_row(), test_row(), test_row()];
        let transactions = assemble_all(&rows).unwrap();
        assert_eq!(transactions.len(), 3);
        assert_ne!(transactions[0].id, transactions[1].id);
        assert_ne!(transactions[1].id, transactions[2].id);
        assert_ne!(transactions[0].id, transactions[2].id);
    }

    #[test]
    fn test_bad_timestamp_fails_row() {
        let mut row = test_row();
        row.timestamp = "01/06/2023 14:30".to_string();
        assert!(assemble(&row).is_err());
    }

    #[test]
    fn test_bad_price_fails_row() {
        let mut row = test_row();
        row.orders = "Large,latte,free".to_string();
        assert!(assemble(&row).is_err());
    }

    #[test]
    fn test_empty_orders_yield_empty_basket() {
        let mut row = test_row();
        row.orders = String::new();
        let transaction = assemble(&row).unwrap();
        assert!(transaction.basket.is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let row = test_row();
        let before = row.clone();
        let _ = assemble(&row).unwrap();
        assert_eq!(row, before);
    }
}
