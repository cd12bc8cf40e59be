use crate::Entry;

use super::index::next_power_of_two;

/// Extends `entries` with zero entries up to the next power of two.
///
/// The given entries keep their positions; an empty list becomes a single
/// zero entry.
pub fn pad_to_power_of_two(entries: &[Entry]) -> Vec<Entry> {
    let mut padded = entries.to_vec();
    padded.resize(next_power_of_two(entries.len()), Entry::zero());
    padded
}
