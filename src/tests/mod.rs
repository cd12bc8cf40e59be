//! Tests for airdrop trees and proofs

mod vectors;

use crate::{Hasher, Proof, Variant};

/// Folds `proof` onto `leaf` with the variant's branch rule.
pub(crate) fn recompute_root<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    leaf: [u8; HASH_SIZE],
    proof: &Proof<HASH_SIZE>,
    variant: Variant,
) -> [u8; HASH_SIZE] {
    proof
        .siblings()
        .iter()
        .fold(leaf, |current, sibling| variant.branch::<HASH_SIZE, H>(&current, sibling))
}
