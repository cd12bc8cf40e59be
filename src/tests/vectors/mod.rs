use std::fs;
use std::path::PathBuf;

mod types;

use sha3::Keccak256;

use crate::format::HexAirdrop;
use crate::node::{leaf_hash, unbalanced_leaf_hash};
use crate::tests::recompute_root;
use crate::{create_airdrop_tree, create_unbalanced_airdrop_tree, Variant};
use types::TestVectors;

fn run_test_vectors(test_vectors: &TestVectors) {
    for case in &test_vectors.cases {
        let comment = case.comment.as_deref().unwrap_or("unnamed test");
        println!("Running test case: {}", comment);
        let entries = case.entries().unwrap();

        let balanced = create_airdrop_tree(&entries).unwrap();
        assert_eq!(HexAirdrop::from(&balanced), case.balanced, "{}", comment);
        assert_eq!(case.balanced.to_airdrop::<32>().unwrap(), balanced);

        let unbalanced = create_unbalanced_airdrop_tree(&entries).unwrap();
        assert_eq!(HexAirdrop::from(&unbalanced), case.unbalanced, "{}", comment);

        for (index, entry) in entries.iter().enumerate() {
            assert_eq!(
                recompute_root::<32, Keccak256>(
                    leaf_hash::<32, Keccak256>(entry),
                    &balanced.proofs()[index],
                    Variant::Balanced
                ),
                balanced.root(),
                "{}: balanced proof {}",
                comment,
                index
            );
            if entry.is_zero_amount() {
                continue;
            }
            assert_eq!(
                recompute_root::<32, Keccak256>(
                    unbalanced_leaf_hash::<32, Keccak256>(entry),
                    &unbalanced.proofs()[index],
                    Variant::Unbalanced
                ),
                unbalanced.root(),
                "{}: unbalanced proof {}",
                comment,
                index
            );
        }
    }
}

#[test]
fn test_airdrop_vectors() {
    let path = PathBuf::from("src/tests/vectors/testdata/airdrop_vectors.json");
    let json = fs::read_to_string(&path).unwrap();
    let test_vectors = TestVectors::from_json(&json).unwrap();
    assert_eq!(test_vectors.cases.len(), 6);
    run_test_vectors(&test_vectors);
}
