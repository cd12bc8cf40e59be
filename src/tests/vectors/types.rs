use serde::{Deserialize, Serialize};

use crate::format::HexAirdrop;
use crate::{AirdropError, Entry};

/// One airdrop entry as written in the vector files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestEntry {
    pub address: String,
    pub amount: String,
}

impl TestEntry {
    pub fn to_entry(&self) -> Result<Entry, AirdropError> {
        Entry::parse(&self.address, &self.amount)
    }
}

/// An entry list with the expected output of both tree variants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestCase {
    pub comment: Option<String>,
    pub entries: Vec<TestEntry>,
    pub balanced: HexAirdrop,
    pub unbalanced: HexAirdrop,
}

impl TestCase {
    pub fn entries(&self) -> Result<Vec<Entry>, AirdropError> {
        self.entries.iter().map(TestEntry::to_entry).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestVectors {
    pub cases: Vec<TestCase>,
}

impl TestVectors {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_entry_conversion() {
        let entry = TestEntry {
            address: "0x1000000000000000000000000000000000000001".to_string(),
            amount: "0x101".to_string(),
        };
        assert_eq!(entry.to_entry().unwrap().amount(), crate::U256::from(257u64));

        let bad = TestEntry {
            address: "0x10".to_string(),
            amount: "1".to_string(),
        };
        assert!(bad.to_entry().is_err());
    }

    #[test]
    fn test_test_vectors() {
        let json = r#"{"cases":[{"comment":null,"entries":[],"balanced":{"root":"0x00","proofs":[]},"unbalanced":{"root":"0x00","proofs":[]}}]}"#;
        let vectors = TestVectors::from_json(json).unwrap();
        assert_eq!(vectors.cases.len(), 1);
        assert!(vectors.cases[0].entries().unwrap().is_empty());
        let serialized = serde_json::to_string(&vectors).unwrap();
        assert_eq!(TestVectors::from_json(&serialized).unwrap(), vectors);
    }
}
