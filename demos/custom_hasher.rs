//! Example of implementing a custom hasher for airdrop trees
//!
//! This example demonstrates:
//! - Creating a custom hasher implementation
//! - Using it with the tree
//! - Comparing the result with the default Keccak-256 tree

use merkledrop::{create_airdrop_tree, create_tree, AirdropError, Entry, Hasher, Variant};
use sha2::{Digest, Sha256};

// Custom hasher that uses SHA256 but adds a prefix to the input
#[derive(Clone)]
struct PrefixedSha256;

impl Hasher<32> for PrefixedSha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        // Add a custom prefix to the input
        hasher.update(b"custom_prefix:");
        hasher.update(data);
        hasher.finalize().into()
    }
}

fn main() -> Result<(), AirdropError> {
    let entries = vec![
        Entry::parse("0x1000000000000000000000000000000000000001", "1000")?,
        Entry::parse("0x1000000000000000000000000000000000000002", "2000")?,
    ];

    // Create a tree with our custom hasher
    let prefixed = create_tree::<32, PrefixedSha256>(&entries, Variant::Balanced)?;
    println!("Root hash with custom hasher: 0x{}", hex::encode(prefixed.root()));

    // Compare with the default Keccak-256 tree
    let standard = create_airdrop_tree(&entries)?;
    println!("Root hash with Keccak-256: 0x{}", hex::encode(standard.root()));

    // Note that the hashes are different due to our custom hasher
    println!("\nThe hashes are different because our custom hasher adds a prefix to the input.");
    Ok(())
}
