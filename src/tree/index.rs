//! Index arithmetic over the flat, level-ordered node array.
//!
//! Level 0 (the leaves) occupies `[0, n)`, level 1 occupies `[n, n + n/2)`,
//! level 2 `[n + n/2, n + n/2 + n/4)` and so on up to the root at `2n - 2`.

/// Smallest power of two `>= x`. An empty list still gets a single leaf.
pub fn next_power_of_two(x: usize) -> usize {
    x.max(1).next_power_of_two()
}

/// Floor of the base-2 logarithm of `x`.
///
/// # Panics
///
/// Panics if `x` is zero. A tree always has at least one leaf.
pub fn log2(x: usize) -> u32 {
    x.ilog2()
}

/// Index of the direct sibling of `index` within its pair.
pub fn pair_index(index: usize) -> usize {
    if index % 2 == 0 {
        index + 1
    } else {
        index - 1
    }
}

/// Number of leaves of a flat tree holding `len` nodes, if `len` is `2n - 1`
/// for some power of two `n`.
pub fn leaf_count_for(len: usize) -> Option<usize> {
    if len % 2 == 0 {
        return None;
    }
    let leaves = len / 2 + 1;
    leaves.is_power_of_two().then_some(leaves)
}
