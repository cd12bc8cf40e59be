//! Example comparing the balanced and the unbalanced tree
//!
//! This example demonstrates:
//! - Padding leaves hashed into the balanced root
//! - Padding leaves ignored by the unbalanced root
//! - Compressing unbalanced proofs that pass next to padding

use merkledrop::{
    build_airdrop_tree, build_unbalanced_airdrop_tree, AirdropError, Entry, U256,
};

fn main() -> Result<(), AirdropError> {
    tracing_subscriber::fmt().init();

    let entries: Vec<Entry> = (1..=5u8)
        .map(|i| Entry::new([i; 20], U256::from(i) * U256::exp10(18)))
        .collect();

    let balanced = build_airdrop_tree(&entries);
    let unbalanced = build_unbalanced_airdrop_tree(&entries);
    println!(
        "{} leaves ({} padding), depth {}",
        balanced.leaf_count(),
        balanced.leaf_count() - entries.len(),
        balanced.depth()
    );
    println!("Balanced root:   0x{}", hex::encode(balanced.root()));
    println!("Unbalanced root: 0x{}", hex::encode(unbalanced.root()));

    // The last entry sits next to three padding leaves
    let proof = unbalanced.merkle_proof(entries.len() - 1)?;
    let compressed = proof.compress();
    println!(
        "Proof of the last entry: {} siblings, {} kept after compression ({} bytes encoded)",
        proof.len(),
        compressed.siblings().len(),
        compressed.encode().len()
    );
    Ok(())
}
