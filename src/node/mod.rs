mod branch;
mod empty;
mod leaf;

use sha2::Sha256;
use sha3::{Digest, Keccak256};

pub use branch::{inherit_or_pair, sorted_pair};
pub use empty::{is_sentinel, sentinel};
pub use leaf::{leaf_hash, unbalanced_leaf_hash};

impl Hasher<32> for Keccak256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Keccak256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

impl Hasher<32> for Sha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

/// Simple hash trait required to hash the nodes in the tree
///
/// # Type Parameters
/// * `HASH_SIZE` - The size of the hash digest in bytes
pub trait Hasher<const HASH_SIZE: usize> {
    fn hash(data: &[u8]) -> [u8; HASH_SIZE];
}
