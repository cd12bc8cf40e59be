//! Hex presentation of roots and proofs.
//!
//! The core hands out raw node bytes. This module renders them as
//! `0x`-prefixed lowercase hex for transport or display.

use serde::{Deserialize, Serialize};

use crate::{Airdrop, AirdropError, Proof};

/// Renders bytes as `0x` followed by lowercase hex.
pub fn to_hex_string(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parses a `0x`-prefixed (or bare) hex string into a node.
pub fn from_hex_string<const HASH_SIZE: usize>(value: &str) -> Result<[u8; HASH_SIZE], AirdropError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    let mut node = [0u8; HASH_SIZE];
    hex::decode_to_slice(digits, &mut node).map_err(|_| AirdropError::InvalidHex(value.to_string()))?;
    Ok(node)
}

/// Hex rendering of an [`Airdrop`]: the root and one proof per input entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexAirdrop {
    pub root: String,
    pub proofs: Vec<Vec<String>>,
}

impl<const HASH_SIZE: usize> From<&Airdrop<HASH_SIZE>> for HexAirdrop {
    fn from(airdrop: &Airdrop<HASH_SIZE>) -> Self {
        Self {
            root: to_hex_string(&airdrop.root()),
            proofs: airdrop.proofs().iter().map(Proof::to_hex_strings).collect(),
        }
    }
}

impl HexAirdrop {
    /// Parses the hex strings back into raw nodes.
    pub fn to_airdrop<const HASH_SIZE: usize>(&self) -> Result<Airdrop<HASH_SIZE>, AirdropError> {
        let root = from_hex_string(&self.root)?;
        let proofs = self
            .proofs
            .iter()
            .map(|proof| {
                proof
                    .iter()
                    .map(|node| from_hex_string(node))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Proof::new)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Airdrop::new(root, proofs))
    }
}
