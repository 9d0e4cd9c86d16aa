use serde::{Deserialize, Serialize};

use crate::ids::TransactionId;
use crate::product::ProductEntry;

/// One normalized point-of-sale transaction.
///
/// Constructed fresh per input row by the assembler in `pos-transform` and
/// immutable afterwards. `basket` preserves the order of appearance in the
/// source "Orders" token stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Freshly generated identifier, unrelated to any input field.
    pub id: TransactionId,
    /// Products purchased, in source token-stream order.
    pub basket: Vec<ProductEntry>,
    /// Epoch seconds parsed from the source timestamp (local time).
    pub datetime: i64,
    /// Store location, passed through verbatim.
    pub location: String,
    /// Payment type, passed through verbatim.
    pub payment_type: String,
    /// Transaction total, source representation preserved.
    pub transaction_total: String,
    /// First segment of the card details field; `None` when the source
    /// recorded the literal text "None" (cash transactions).
    pub card_details: Option<String>,
}

impl Transaction {
    /// Returns the number of products in the basket.
    pub fn item_count(&self) -> usize {
        self.basket.len()
    }
}
