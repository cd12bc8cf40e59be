use super::{is_sentinel, Hasher};

/// Hashes two children as `H(min || max)` under lexicographic byte order.
///
/// Sorting before hashing lets a verifier recombine a proof without knowing
/// which side each sibling sits on.
pub fn sorted_pair<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    left: &[u8; HASH_SIZE],
    right: &[u8; HASH_SIZE],
) -> [u8; HASH_SIZE] {
    let (low, high) = if left < right {
        (left, right)
    } else {
        (right, left)
    };
    H::hash([low.as_slice(), high.as_slice()].concat().as_slice())
}

/// Branch rule of the unbalanced tree: a sentinel child makes the parent a
/// copy of the other child, otherwise the children are combined with
/// [`sorted_pair`].
pub fn inherit_or_pair<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    left: &[u8; HASH_SIZE],
    right: &[u8; HASH_SIZE],
) -> [u8; HASH_SIZE] {
    if is_sentinel(left) {
        *right
    } else if is_sentinel(right) {
        *left
    } else {
        sorted_pair::<HASH_SIZE, H>(left, right)
    }
}

#[cfg(test)]
mod test {
    use hex_literal::hex;
    use sha3::Keccak256;

    use super::{inherit_or_pair, sorted_pair};

    const A: [u8; 32] = hex!("76b730396a0ed0be5382b6d74d20935c0701c8a72479b313f6424c588e116306");
    const B: [u8; 32] = hex!("5241ee0638720938cfddabb2b06604182ae4d709697f2b468e3e8aa123d9037e");
    const AB: [u8; 32] = hex!("375d93a58682d6bac6795ed52a141f36f4c628fd302bcb7fe09ad753928c4da6");

    #[test]
    fn test_sorted_pair() {
        assert_eq!(sorted_pair::<32, Keccak256>(&A, &B), AB);
    }

    #[test]
    fn test_sorted_pair_is_order_independent() {
        assert_eq!(
            sorted_pair::<32, Keccak256>(&A, &B),
            sorted_pair::<32, Keccak256>(&B, &A)
        );
    }

    #[test]
    fn test_sorted_pair_of_equal_children() {
        let expected = sorted_pair::<32, Keccak256>(&A, &A);
        assert_ne!(expected, A);
        assert_eq!(expected.len(), 32);
    }

    #[test]
    fn test_inherit_or_pair() {
        let zero = [0u8; 32];
        assert_eq!(inherit_or_pair::<32, Keccak256>(&A, &zero), A);
        assert_eq!(inherit_or_pair::<32, Keccak256>(&zero, &B), B);
        assert_eq!(inherit_or_pair::<32, Keccak256>(&zero, &zero), zero);
        assert_eq!(inherit_or_pair::<32, Keccak256>(&A, &B), AB);
    }
}
