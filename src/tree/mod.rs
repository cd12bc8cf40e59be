//! Flat, array-backed airdrop trees.
//!
//! A tree over `n` leaves (`n` a power of two) is stored as `2n - 1` nodes in
//! level order: the leaves first, in input order, then every internal level
//! bottom-up, with the root last.

mod balanced;
pub mod index;
mod pad;
mod unbalanced;

use std::fmt::Display;

pub use balanced::build_balanced;
pub use pad::pad_to_power_of_two;
pub use unbalanced::build_unbalanced;

use crate::node::{inherit_or_pair, sorted_pair, Hasher};
use crate::proof::{self, Proof};
use crate::{AirdropError, Entry};

use index::{leaf_count_for, log2};

/// How leaves and branches are hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Every leaf is hashed, every branch is a sorted pair.
    #[default]
    Balanced,
    /// Zero-amount leaves are the all-zero sentinel and a branch with one
    /// sentinel child copies the other child.
    Unbalanced,
}

impl Variant {
    /// Combines two children with this variant's branch rule.
    pub fn branch<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
        &self,
        left: &[u8; HASH_SIZE],
        right: &[u8; HASH_SIZE],
    ) -> [u8; HASH_SIZE] {
        match self {
            Self::Balanced => sorted_pair::<HASH_SIZE, H>(left, right),
            Self::Unbalanced => inherit_or_pair::<HASH_SIZE, H>(left, right),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Balanced => f.write_str("balanced"),
            Self::Unbalanced => f.write_str("unbalanced"),
        }
    }
}

/// An airdrop Merkle tree stored as a flat node array.
///
/// # Type Parameters
/// * `HASH_SIZE` - The size of every node in bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirdropTree<const HASH_SIZE: usize> {
    nodes: Vec<[u8; HASH_SIZE]>,
    variant: Variant,
}

impl<const HASH_SIZE: usize> AirdropTree<HASH_SIZE> {
    /// Pads `entries` to a power of two and builds the tree. This hashes every
    /// leaf and every branch.
    pub fn build<H: Hasher<HASH_SIZE>>(entries: &[Entry], variant: Variant) -> Self {
        match variant {
            Variant::Balanced => build_balanced::<HASH_SIZE, H>(entries),
            Variant::Unbalanced => build_unbalanced::<HASH_SIZE, H>(entries),
        }
    }

    /// Builds the tree over already hashed leaves.
    ///
    /// The leaf count must be a power of two.
    pub fn from_leaves<H: Hasher<HASH_SIZE>>(
        leaves: Vec<[u8; HASH_SIZE]>,
        variant: Variant,
    ) -> Result<Self, AirdropError> {
        if !leaves.len().is_power_of_two() {
            return Err(AirdropError::LeafCountNotPowerOfTwo(leaves.len()));
        }
        Ok(Self {
            nodes: fold_levels(leaves, |left, right| {
                variant.branch::<HASH_SIZE, H>(left, right)
            }),
            variant,
        })
    }

    /// Wraps a flat node array produced elsewhere. Nothing is rehashed, only
    /// the shape is checked.
    pub fn from_nodes(nodes: Vec<[u8; HASH_SIZE]>, variant: Variant) -> Result<Self, AirdropError> {
        if leaf_count_for(nodes.len()).is_none() {
            return Err(AirdropError::MalformedTree { len: nodes.len() });
        }
        Ok(Self { nodes, variant })
    }

    /// Root of the tree. NO HASHING IS DONE HERE.
    pub fn root(&self) -> [u8; HASH_SIZE] {
        self.nodes[self.nodes.len() - 1]
    }

    /// All nodes, leaves first and root last.
    pub fn nodes(&self) -> &[[u8; HASH_SIZE]] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<[u8; HASH_SIZE]> {
        self.nodes
    }

    /// The leaf row, padding included.
    pub fn leaves(&self) -> &[[u8; HASH_SIZE]] {
        &self.nodes[..self.leaf_count()]
    }

    pub fn leaf(&self, index: usize) -> Option<&[u8; HASH_SIZE]> {
        self.leaves().get(index)
    }

    /// Number of leaves, padding included. Always a power of two.
    pub fn leaf_count(&self) -> usize {
        self.nodes.len() / 2 + 1
    }

    /// Number of levels above the leaves, which is also the length of every proof.
    pub fn depth(&self) -> u32 {
        log2(self.leaf_count())
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Sibling path of the leaf at `index`.
    pub fn merkle_proof(&self, index: usize) -> Result<Proof<HASH_SIZE>, AirdropError> {
        proof::extract(&self.nodes, index)
    }
}

/// Appends every internal level on top of `leaves`, bottom-up.
///
/// Node `n + k` is `combine(nodes[2k], nodes[2k + 1])`. `leaves` must be a
/// non-empty power of two.
pub(crate) fn fold_levels<const HASH_SIZE: usize>(
    leaves: Vec<[u8; HASH_SIZE]>,
    combine: impl Fn(&[u8; HASH_SIZE], &[u8; HASH_SIZE]) -> [u8; HASH_SIZE],
) -> Vec<[u8; HASH_SIZE]> {
    let leaf_count = leaves.len();
    let mut nodes = leaves;
    nodes.reserve(leaf_count - 1);
    for parent in leaf_count..2 * leaf_count - 1 {
        let left = 2 * (parent - leaf_count);
        let node = combine(&nodes[left], &nodes[left + 1]);
        nodes.push(node);
    }
    nodes
}
