pub mod ids;
pub mod product;
pub mod transaction;

pub use ids::TransactionId;
pub use product::ProductEntry;
pub use transaction::Transaction;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_serializes() {
        let transaction = Transaction {
            id: TransactionId::new(),
            basket: vec![ProductEntry {
                name: "Latte".to_string(),
                flavour: "Vanilla".to_string(),
                size: "Large".to_string(),
                price: 4.5,
                iced: true,
            }],
            datetime: 1_685_622_600,
            location: "Aberdeen".to_string(),
            payment_type: "CARD".to_string(),
            transaction_total: "4.50".to_string(),
            card_details: None,
        };
        let json = serde_json::to_string(&transaction).expect("serialize transaction");
        let round: Transaction = serde_json::from_str(&json).expect("deserialize transaction");
        assert_eq!(round.basket.len(), 1);
        assert_eq!(round.basket[0].name, "Latte");
        assert_eq!(round.card_details, None);
    }

    #[test]
    fn absent_card_details_serialize_as_null() {
        let transaction = Transaction {
            id: TransactionId::new(),
            basket: vec![],
            datetime: 0,
            location: "Leith".to_string(),
            payment_type: "CASH".to_string(),
            transaction_total: "0.00".to_string(),
            card_details: None,
        };
        let value = serde_json::to_value(&transaction).expect("serialize transaction");
        assert!(value["card_details"].is_null());
    }

    #[test]
    fn entry_reports_flavour_presence() {
        let entry = ProductEntry {
            name: "Hot Chocolate".to_string(),
            flavour: String::new(),
            size: "Regular".to_string(),
            price: 3.2,
            iced: false,
        };
        assert!(!entry.has_flavour());
    }
}
