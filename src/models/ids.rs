//! Deterministic record ID generation using SHA256 hashing.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A deterministic record ID derived from the input position and raw line.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Create a new RecordId from a hash string.
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Generate a RecordId from input fields.
    /// Uses SHA256 and takes the first 16 characters for brevity.
    pub fn generate(fields: &[&str]) -> Self {
        let mut hasher = Sha256::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                hasher.update(b"|");
            }
            hasher.update(field.as_bytes());
        }
        let hash = hex::encode(hasher.finalize());
        Self(hash[..16].to_string())
    }

    /// ID for the line at `index` of a batch.
    pub fn for_line(index: usize, line: &str) -> Self {
        Self::generate(&[&index.to_string(), line])
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_deterministic() {
        let id1 = RecordId::for_line(0, "6000,1h00m");
        let id2 = RecordId::for_line(0, "6000,1h00m");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_record_id_repeated_line_differs_by_index() {
        let id1 = RecordId::for_line(0, "6000,1h00m");
        let id2 = RecordId::for_line(1, "6000,1h00m");
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_record_id_hex_format() {
        let id = RecordId::generate(&["test"]);
        assert_eq!(id.as_str().len(), 16);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_record_id_serialization() {
        let id = RecordId::new("abc123def4567890".to_string());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc123def4567890\"");
        assert_eq!(format!("{}", id), "abc123def4567890");
    }
}
