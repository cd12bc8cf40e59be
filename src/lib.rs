//! Merkle commitments for airdrop lists
//!
//! This crate builds a binary Merkle tree over `(address, amount)` entries and
//! extracts, for every entry, the sibling path a verifier needs to recompute
//! the published root from that single leaf.
//!
//! The crate supports:
//! - Canonical `(address, uint256)` leaf encoding
//! - Sorted-pair branch hashing, so proofs carry no left/right flags
//! - A balanced tree that hashes padding like any other leaf
//! - An unbalanced tree where zero-amount leaves are transparent to the root
//! - Pluggable hash functions through the `Hasher` trait (Keccak-256 by default)

mod airdrop;
mod entry;
mod error;
pub mod format;
pub mod node;
pub mod proof;
pub mod tree;

pub use airdrop::{
    build_airdrop_tree, build_tree, build_unbalanced_airdrop_tree, create_airdrop_tree,
    create_tree, create_unbalanced_airdrop_tree, Airdrop,
};
pub use entry::{encode_leaf, parse_address, parse_amount, Address, Entry, ENCODED_LEN};
pub use error::AirdropError;
pub use node::Hasher;
pub use primitive_types::U256;
pub use proof::{CompressedProof, Proof};
pub use tree::{AirdropTree, Variant};

#[cfg(test)]
mod tests;
