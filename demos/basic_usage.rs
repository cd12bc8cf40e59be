//! Basic example of committing to an airdrop list
//!
//! This example demonstrates:
//! - Parsing entries from text
//! - Building the balanced tree
//! - Getting the root hash
//! - Printing every entry's proof as hex

use merkledrop::{create_airdrop_tree, format::HexAirdrop, AirdropError, Entry};

fn main() -> Result<(), AirdropError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Parse some entries with different amounts
    let entries = vec![
        Entry::parse("0x1000000000000000000000000000000000000001", "0x101")?,
        Entry::parse("0x1000000000000000000000000000000000000002", "0x102")?,
        Entry::parse("0x1000000000000000000000000000000000000003", "259")?,
    ];

    // Build the tree and extract one proof per entry
    let airdrop = create_airdrop_tree(&entries)?;
    println!("Root hash: 0x{}", hex::encode(airdrop.root()));

    for (entry, proof) in entries.iter().zip(airdrop.proofs()) {
        println!("{} -> {}", entry, proof);
    }

    // The same result, ready to be written out as JSON
    let hex_airdrop = HexAirdrop::from(&airdrop);
    println!("{:?}", hex_airdrop);
    Ok(())
}
