//! Typed binding for one source CSV row.

use serde::Deserialize;

/// One raw transaction row as exported by the point-of-sale system.
///
/// Field names bind the exact, case-sensitive CSV headers, including the
/// embedded spaces ("Card Details", "Payment Type"). A row missing any of
/// these fields fails to deserialize, which surfaces as a hard ingest
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceRow {
    /// Flat comma-delimited order string: repeated (size, name, price)
    /// triples.
    #[serde(rename = "Orders")]
    pub orders: String,

    /// Raw card details; "None" for cash transactions.
    #[serde(rename = "Card Details")]
    pub card_details: String,

    /// Timestamp in "YYYY-MM-DD HH:MM:SS" form.
    #[serde(rename = "Timestamp")]
    pub timestamp: String,

    /// Store location.
    #[serde(rename = "Location")]
    pub location: String,

    /// Payment type (e.g. "CARD", "CASH").
    #[serde(rename = "Payment Type")]
    pub payment_type: String,

    /// Transaction total as written in the source.
    #[serde(rename = "Cost")]
    pub cost: String,
}
