use serde::{Deserialize, Serialize};

/// A single product purchased within a transaction.
///
/// Entries are produced by the basket parser in `pos-transform`. The `name`
/// is title-cased with the descriptive marker substrings ("Flavoured ",
/// "Speciality ", "Iced ") already extracted: after construction the name
/// never contains a marker, and `iced` records whether the "Iced " marker
/// was present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    /// Title-cased product name with marker substrings stripped.
    pub name: String,
    /// Title-cased flavour; empty when the source name carried no flavour.
    pub flavour: String,
    /// Size as written in the source, empty when the source token was empty.
    pub size: String,
    /// Unit price parsed from the source token.
    pub price: f64,
    /// True when the source name carried the "Iced " marker.
    pub iced: bool,
}

impl ProductEntry {
    /// Returns true when a flavour was specified for this product.
    pub fn has_flavour(&self) -> bool {
        !self.flavour.is_empty()
    }
}
