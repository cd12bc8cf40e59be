use crate::Entry;

use super::{sentinel, Hasher};

/// Hashes the canonical encoding of `entry`. This function performs a hash.
pub fn leaf_hash<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(entry: &Entry) -> [u8; HASH_SIZE] {
    H::hash(entry.encode().as_slice())
}

/// Leaf rule of the unbalanced tree: zero-amount entries become the sentinel
/// and are never hashed.
pub fn unbalanced_leaf_hash<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    entry: &Entry,
) -> [u8; HASH_SIZE] {
    if entry.is_zero_amount() {
        sentinel()
    } else {
        leaf_hash::<HASH_SIZE, H>(entry)
    }
}
