use crate::node::{inherit_or_pair, unbalanced_leaf_hash, Hasher};
use crate::Entry;

use super::{fold_levels, pad_to_power_of_two, AirdropTree, Variant};

/// Builds the unbalanced tree: zero-amount leaves are the sentinel and a
/// branch over a sentinel inherits its other child, so padding never changes
/// the root.
pub fn build_unbalanced<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    entries: &[Entry],
) -> AirdropTree<HASH_SIZE> {
    let leaves = pad_to_power_of_two(entries)
        .iter()
        .map(unbalanced_leaf_hash::<HASH_SIZE, H>)
        .collect();
    AirdropTree {
        nodes: fold_levels(leaves, inherit_or_pair::<HASH_SIZE, H>),
        variant: Variant::Unbalanced,
    }
}
