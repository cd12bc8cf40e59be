//! Airdrop commitments: build the tree, then hand out the root and one proof
//! per entry.

use sha3::Keccak256;
use tracing::{debug, warn};

use crate::format::to_hex_string;
use crate::node::Hasher;
use crate::tree::index::next_power_of_two;
use crate::{AirdropError, AirdropTree, Entry, Proof, Variant};

/// Root of an airdrop tree and the proof of every input entry, aligned with
/// the input order. Padding leaves get no proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airdrop<const HASH_SIZE: usize> {
    root: [u8; HASH_SIZE],
    proofs: Vec<Proof<HASH_SIZE>>,
}

impl<const HASH_SIZE: usize> Airdrop<HASH_SIZE> {
    pub fn new(root: [u8; HASH_SIZE], proofs: Vec<Proof<HASH_SIZE>>) -> Self {
        Self { root, proofs }
    }

    pub fn root(&self) -> [u8; HASH_SIZE] {
        self.root
    }

    pub fn proofs(&self) -> &[Proof<HASH_SIZE>] {
        &self.proofs
    }

    /// Proof of the entry at `index` in the input list.
    pub fn proof(&self, index: usize) -> Option<&Proof<HASH_SIZE>> {
        self.proofs.get(index)
    }

    pub fn into_parts(self) -> ([u8; HASH_SIZE], Vec<Proof<HASH_SIZE>>) {
        (self.root, self.proofs)
    }
}

/// Builds the balanced Keccak-256 tree over `entries`.
pub fn build_airdrop_tree(entries: &[Entry]) -> AirdropTree<32> {
    build_tree::<32, Keccak256>(entries, Variant::Balanced)
}

/// Builds the unbalanced Keccak-256 tree over `entries`.
pub fn build_unbalanced_airdrop_tree(entries: &[Entry]) -> AirdropTree<32> {
    build_tree::<32, Keccak256>(entries, Variant::Unbalanced)
}

/// Builds the balanced Keccak-256 tree and extracts every entry's proof.
pub fn create_airdrop_tree(entries: &[Entry]) -> Result<Airdrop<32>, AirdropError> {
    create_tree::<32, Keccak256>(entries, Variant::Balanced)
}

/// Builds the unbalanced Keccak-256 tree and extracts every entry's proof.
pub fn create_unbalanced_airdrop_tree(entries: &[Entry]) -> Result<Airdrop<32>, AirdropError> {
    create_tree::<32, Keccak256>(entries, Variant::Unbalanced)
}

/// Builds an airdrop tree with any hasher and variant.
pub fn build_tree<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    entries: &[Entry],
    variant: Variant,
) -> AirdropTree<HASH_SIZE> {
    debug!(
        %variant,
        entries = entries.len(),
        leaves = next_power_of_two(entries.len()),
        "building airdrop tree"
    );
    if variant == Variant::Unbalanced {
        for (index, entry) in entries.iter().enumerate() {
            if entry.is_zero_amount() {
                warn!(index, %entry, "zero-amount entry is treated as absent in the unbalanced tree");
            }
        }
    }
    AirdropTree::build::<H>(entries, variant)
}

/// Builds an airdrop tree with any hasher and variant, then extracts the
/// proof of every input entry.
pub fn create_tree<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    entries: &[Entry],
    variant: Variant,
) -> Result<Airdrop<HASH_SIZE>, AirdropError> {
    let tree = build_tree::<HASH_SIZE, H>(entries, variant);
    let proofs = (0..entries.len())
        .map(|index| tree.merkle_proof(index))
        .collect::<Result<Vec<_>, _>>()?;
    let root = tree.root();
    debug!(
        %variant,
        root = %to_hex_string(&root),
        proofs = proofs.len(),
        depth = tree.depth(),
        "airdrop tree created"
    );
    Ok(Airdrop::new(root, proofs))
}

#[cfg(test)]
mod test {
    use hex_literal::hex;
    use primitive_types::U256;
    use sha2::Sha256;

    use super::*;

    fn airdrop_list() -> Vec<Entry> {
        vec![
            Entry::new(hex!("1000000000000000000000000000000000000001"), U256::from(0x101u64)),
            Entry::new(hex!("1000000000000000000000000000000000000002"), U256::from(0x102u64)),
            Entry::new(hex!("1000000000000000000000000000000000000003"), U256::from(0x103u64)),
        ]
    }

    #[test]
    fn test_create_airdrop_tree() {
        let airdrop = create_airdrop_tree(&airdrop_list()).unwrap();
        assert_eq!(
            airdrop.root(),
            hex!("35368e4a8ca019c560a5b43a1c835caf934d1b0d7751ce756c92df9c60c20c69")
        );
        assert_eq!(airdrop.proofs().len(), 3);
        assert_eq!(
            airdrop.proof(0).unwrap().siblings(),
            [
                hex!("5241ee0638720938cfddabb2b06604182ae4d709697f2b468e3e8aa123d9037e"),
                hex!("efaa07aec607ffcaf85ffae880f3095fc5e5e5c5c372f30073be28d35d54308b"),
            ]
        );
        assert!(airdrop.proof(3).is_none());
    }

    #[test]
    fn test_create_unbalanced_airdrop_tree() {
        let airdrop = create_unbalanced_airdrop_tree(&airdrop_list()).unwrap();
        assert_eq!(
            airdrop.root(),
            hex!("f9dc203a860804188d3bf210365c696863a73616ca8a2ef0528f0bc60ce0b652")
        );
        assert_eq!(
            airdrop.proof(2).unwrap().siblings(),
            [
                [0u8; 32],
                hex!("375d93a58682d6bac6795ed52a141f36f4c628fd302bcb7fe09ad753928c4da6"),
            ]
        );
    }

    #[test]
    fn test_build_airdrop_trees() {
        let balanced = build_airdrop_tree(&airdrop_list());
        let unbalanced = build_unbalanced_airdrop_tree(&airdrop_list());
        assert_eq!(balanced.nodes().len(), 7);
        assert_eq!(unbalanced.nodes().len(), 7);
        assert_eq!(balanced.variant(), Variant::Balanced);
        assert_eq!(unbalanced.variant(), Variant::Unbalanced);
        assert_eq!(balanced.leaves()[..3], unbalanced.leaves()[..3]);
    }

    #[test]
    fn test_create_empty_airdrop() {
        let airdrop = create_airdrop_tree(&[]).unwrap();
        assert!(airdrop.proofs().is_empty());
        assert_eq!(
            airdrop.root(),
            hex!("a86d54e9aab41ae5e520ff0062ff1b4cbd0b2192bb01080a058bb170d84e6457")
        );
        let (root, proofs) = create_unbalanced_airdrop_tree(&[]).unwrap().into_parts();
        assert_eq!(root, [0u8; 32]);
        assert!(proofs.is_empty());
    }

    #[test]
    fn test_create_tree_with_sha256() {
        let airdrop = create_tree::<32, Sha256>(&airdrop_list(), Variant::Balanced).unwrap();
        assert_eq!(
            airdrop.root(),
            hex!("1596ea6a715304f9a401891bd769ce87ca7e76e29d0c0a395555333e1a770e2a")
        );
        assert!(airdrop.proofs().iter().all(|proof| proof.len() == 2));
    }
}
