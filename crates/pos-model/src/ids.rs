use std::fmt;

use uuid::Uuid;

/// A freshly generated transaction identifier.
///
/// Identifiers are random v4 UUIDs rendered as their canonical hyphenated
/// string form. Generation is stateless; no two generated identifiers
/// collide within a batch.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generates a fresh random identifier, unrelated to any input field.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for TransactionId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for TransactionId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        if value.is_empty() {
            return Err(serde::de::Error::custom("transaction id must be non-empty"));
        }
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: BTreeSet<String> = (0..64)
            .map(|_| TransactionId::new().as_str().to_string())
            .collect();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn test_display_matches_as_str() {
        let id = TransactionId::new();
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn test_rejects_empty_on_deserialize() {
        let result: Result<TransactionId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
