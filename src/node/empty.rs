/// The all-zero node the unbalanced tree uses to mark an absent leaf.
pub const fn sentinel<const HASH_SIZE: usize>() -> [u8; HASH_SIZE] {
    [0; HASH_SIZE]
}

/// Returns `true` if `node` is the absent-leaf sentinel.
pub fn is_sentinel<const HASH_SIZE: usize>(node: &[u8; HASH_SIZE]) -> bool {
    node.iter().all(|byte| *byte == 0)
}

#[cfg(test)]
mod test {
    use super::{is_sentinel, sentinel};

    #[test]
    fn test_sentinel() {
        assert_eq!(sentinel::<32>(), [0u8; 32]);
        assert!(is_sentinel(&sentinel::<32>()));
        assert!(is_sentinel(&[0u8; 64]));
    }

    #[test]
    fn test_non_sentinel() {
        let mut node = [0u8; 32];
        node[31] = 1;
        assert!(!is_sentinel(&node));
    }
}
