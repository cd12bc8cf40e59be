//! Inclusion proofs are the sibling paths from a leaf up to the root.
//!
//! A proof lists one sibling per level, starting with the leaf's direct
//! sibling and ending just below the root.
//!
//! A proof can be compressed into a bitvector plus the non-sentinel siblings.
//! Unbalanced trees put sentinel siblings in every proof that passes next to
//! padding, so their proofs compress well.
use std::fmt::Display;

use bitvec::order::Lsb0;
use bitvec::vec::BitVec;

use crate::format::to_hex_string;
use crate::node::{is_sentinel, sentinel};
use crate::tree::index::{leaf_count_for, log2, pair_index};
use crate::AirdropError;

/// Extracts the sibling path of the leaf at `index` from a flat tree.
///
/// `nodes` must hold `2n - 1` nodes in level order and `index` must be below
/// `n`. A single-leaf tree yields an empty proof.
pub fn extract<const HASH_SIZE: usize>(
    nodes: &[[u8; HASH_SIZE]],
    index: usize,
) -> Result<Proof<HASH_SIZE>, AirdropError> {
    let leaves =
        leaf_count_for(nodes.len()).ok_or(AirdropError::MalformedTree { len: nodes.len() })?;
    if index >= leaves {
        return Err(AirdropError::IndexOutOfRange { index, leaves });
    }
    if leaves == 1 {
        return Ok(Proof::default());
    }

    let mut level = log2(leaves);
    let mut siblings = Vec::with_capacity(level as usize);
    siblings.push(nodes[pair_index(index)]);

    // `offset` is the base address of the level being visited, i.e. the
    // number of nodes in every level below it.
    let mut position = index;
    let mut offset = 0usize;
    while level > 1 {
        position /= 2;
        offset += 1 << level;
        siblings.push(nodes[pair_index(position + offset)]);
        level -= 1;
    }
    Ok(Proof::new(siblings))
}

/// A merkle proof for a given leaf.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Proof<const HASH_SIZE: usize> {
    siblings: Vec<[u8; HASH_SIZE]>,
}

impl<const HASH_SIZE: usize> Proof<HASH_SIZE> {
    /// Creates a new proof from a list of siblings, lowest level first.
    pub fn new(siblings: Vec<[u8; HASH_SIZE]>) -> Self {
        Self { siblings }
    }

    /// Returns the siblings in the proof.
    pub fn siblings(&self) -> &[[u8; HASH_SIZE]] {
        &self.siblings
    }

    pub fn into_siblings(self) -> Vec<[u8; HASH_SIZE]> {
        self.siblings
    }

    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Renders every sibling as a `0x`-prefixed lowercase hex string.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.siblings.iter().map(|node| to_hex_string(node)).collect()
    }

    /// Compresses the proof into a compressed proof.
    pub fn compress(&self) -> CompressedProof<HASH_SIZE> {
        let mut bits = BitVec::with_capacity(self.siblings.len());
        let mut siblings = Vec::new();
        for node in self.siblings.iter() {
            if is_sentinel(node) {
                bits.push(true);
            } else {
                bits.push(false);
                siblings.push(*node);
            }
        }
        CompressedProof::new(siblings, bits)
    }
}

impl<const HASH_SIZE: usize> Display for Proof<HASH_SIZE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.to_hex_strings().join(", "))
    }
}

/// A compressed merkle proof.
/// We don't store the siblings that are sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedProof<const HASH_SIZE: usize> {
    siblings: Vec<[u8; HASH_SIZE]>,
    bits: BitVec<u8, Lsb0>,
}

impl<const HASH_SIZE: usize> CompressedProof<HASH_SIZE> {
    /// Creates a new compressed proof from the kept siblings and a bitvector
    /// marking the elided sentinel positions.
    pub fn new(siblings: Vec<[u8; HASH_SIZE]>, bits: BitVec<u8, Lsb0>) -> Self {
        Self { siblings, bits }
    }

    pub fn siblings(&self) -> &[[u8; HASH_SIZE]] {
        &self.siblings
    }

    pub fn bits(&self) -> &BitVec<u8, Lsb0> {
        &self.bits
    }

    /// Decompresses the proof into a proof.
    pub fn decompress(&self) -> Result<Proof<HASH_SIZE>, AirdropError> {
        let expected = self.bits.count_zeros();
        if self.siblings.len() != expected {
            return Err(AirdropError::InvalidCompressedProof {
                expected,
                got: self.siblings.len(),
            });
        }
        let mut siblings = Vec::with_capacity(self.bits.len());
        let mut next_node = 0;
        for bit in self.bits.iter() {
            if *bit {
                siblings.push(sentinel());
            } else {
                siblings.push(self.siblings[next_node]);
                next_node += 1;
            }
        }
        Ok(Proof::new(siblings))
    }

    /// Encodes the proof as `bit count (u16) || sibling count (u16) ||
    /// siblings || bitmap bytes`.
    pub fn encode(&self) -> Vec<u8> {
        let mut encoded = Vec::with_capacity(4 + self.siblings.len() * HASH_SIZE);
        encoded.extend_from_slice(&(self.bits.len() as u16).to_be_bytes());
        encoded.extend_from_slice(&(self.siblings.len() as u16).to_be_bytes());
        for node in self.siblings.iter() {
            encoded.extend_from_slice(node);
        }
        encoded.extend_from_slice(self.bits.as_raw_slice());
        encoded
    }

    /// Decodes a proof produced by [`CompressedProof::encode`].
    pub fn decode(data: &[u8]) -> Result<Self, AirdropError> {
        let truncated = || AirdropError::InvalidCompressedProof {
            expected: 4,
            got: data.len(),
        };
        let header = data.get(..4).ok_or_else(truncated)?;
        let nb_bits = u16::from_be_bytes([header[0], header[1]]) as usize;
        let nb_siblings = u16::from_be_bytes([header[2], header[3]]) as usize;
        let bitmap_len = nb_bits.div_ceil(8);
        let expected = 4 + nb_siblings * HASH_SIZE + bitmap_len;
        if data.len() != expected {
            return Err(AirdropError::InvalidCompressedProof {
                expected,
                got: data.len(),
            });
        }

        let mut siblings = Vec::with_capacity(nb_siblings);
        let mut data_index = 4;
        for _ in 0..nb_siblings {
            let mut node = [0u8; HASH_SIZE];
            node.copy_from_slice(&data[data_index..data_index + HASH_SIZE]);
            data_index += HASH_SIZE;
            siblings.push(node);
        }
        let mut bits = BitVec::<u8, Lsb0>::from_slice(&data[data_index..]);
        bits.truncate(nb_bits);
        Ok(Self::new(siblings, bits))
    }
}
