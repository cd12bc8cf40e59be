//! Error types for airdrop tree construction and proof extraction

use thiserror::Error;

/// Errors surfaced by entry validation, tree construction and proof extraction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AirdropError {
    /// Address is not 20 bytes of hex
    #[error("invalid address {0:?}: expected 40 hex characters")]
    InvalidAddress(String),
    /// Amount is empty or not a number
    #[error("invalid amount {0:?}")]
    InvalidAmount(String),
    /// Amount is negative or does not fit in 256 bits
    #[error("amount {0:?} is out of the uint256 range")]
    AmountOutOfRange(String),
    /// Requested leaf does not exist in the tree
    #[error("leaf index {index} is out of bounds for tree with {leaves} leaves")]
    IndexOutOfRange { index: usize, leaves: usize },
    /// Flat node array is not a complete binary tree
    #[error("tree with {len} nodes is not a complete binary tree")]
    MalformedTree { len: usize },
    /// Leaf row length is not a power of two
    #[error("leaf count {0} is not a power of two")]
    LeafCountNotPowerOfTwo(usize),
    /// Compressed proof bitmap, sibling list or encoded length disagree
    #[error("invalid compressed proof: expected {expected}, got {got}")]
    InvalidCompressedProof { expected: usize, got: usize },
    /// Hex string could not be decoded into a node
    #[error("invalid hex node {0:?}")]
    InvalidHex(String),
}
