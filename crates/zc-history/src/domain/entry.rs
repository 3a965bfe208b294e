//! The stored conversion record.

use serde::{Deserialize, Serialize};

/// One recorded conversion: the validated input string and the result
/// sequence produced for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The input string as the gateway accepted it (already trimmed).
    pub input: String,
    /// The z-chain result sequence.
    pub output: Vec<u64>,
}

impl HistoryEntry {
    /// Create a new entry.
    pub fn new(input: impl Into<String>, output: Vec<u64>) -> Self {
        Self {
            input: input.into(),
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let entry = HistoryEntry::new("z_a", vec![1]);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({"input": "z_a", "output": [1]}));
    }
}
