use crate::node::{leaf_hash, sorted_pair, Hasher};
use crate::Entry;

use super::{fold_levels, pad_to_power_of_two, AirdropTree, Variant};

/// Builds the balanced tree: padding entries are hashed like any other leaf
/// and every branch is a sorted pair.
pub fn build_balanced<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    entries: &[Entry],
) -> AirdropTree<HASH_SIZE> {
    let leaves = pad_to_power_of_two(entries)
        .iter()
        .map(leaf_hash::<HASH_SIZE, H>)
        .collect();
    AirdropTree {
        nodes: fold_levels(leaves, sorted_pair::<HASH_SIZE, H>),
        variant: Variant::Balanced,
    }
}
