//! Exact-match binary search over sorted keys

use super::types::SortedPosition;
use std::cmp::Ordering;

/// Find `target` in `sorted` and return its position, or `None` if absent
///
/// `sorted` must be in ascending byte order. This is a caller precondition:
/// release builds do not check it and may miss present keys if it is broken.
/// Keys are assumed unique, so at most one position can match.
pub fn search<K: AsRef<[u8]>>(sorted: &[K], target: &[u8]) -> Option<SortedPosition> {
    debug_assert!(
        sorted.windows(2).all(|w| w[0].as_ref() <= w[1].as_ref()),
        "search requires keys in ascending byte order"
    );

    let mut lo = 0usize;
    let mut hi = sorted.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match sorted[mid].as_ref().cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Greater => hi = mid,
            Ordering::Less => lo = mid + 1,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_key(rng: &mut StdRng) -> Vec<u8> {
        let len = rng.gen_range(0..6);
        (0..len).map(|_| b'a' + rng.gen_range(0..4u8)).collect()
    }

    #[test]
    fn test_finds_every_present_key() {
        let sorted = ["a", "ab", "abc", "b", "ba", "car", "cat", "dog", "z"];
        for (i, key) in sorted.iter().enumerate() {
            assert_eq!(search(&sorted, key.as_bytes()), Some(i), "key {key}");
        }
    }

    #[test]
    fn test_missing_keys() {
        let sorted = ["b", "d", "f"];
        for missing in ["", "a", "c", "e", "g", "bb", "dd"] {
            assert_eq!(search(&sorted, missing.as_bytes()), None, "key {missing:?}");
        }
    }

    #[test]
    fn test_random_sorted_sequences() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let size = rng.gen_range(0..40);
            let mut sorted: Vec<Vec<u8>> = (0..size).map(|_| random_key(&mut rng)).collect();
            sorted.sort();
            sorted.dedup();

            for (i, key) in sorted.iter().enumerate() {
                assert_eq!(search(&sorted, key), Some(i));
            }
            for _ in 0..20 {
                let target = random_key(&mut rng);
                let expected = sorted.iter().position(|k| *k == target);
                assert_eq!(search(&sorted, &target), expected, "key {target:?}");
            }
        }
    }

    #[test]
    fn test_empty_sequence() {
        let sorted: [&str; 0] = [];
        assert_eq!(search(&sorted, b"anything"), None);
    }

    #[test]
    fn test_bytewise_ordering() {
        // Uppercase sorts before lowercase, multibyte UTF-8 after ASCII
        let sorted = ["Zed", "apple", "zebra", "\u{e9}clair"];
        assert_eq!(search(&sorted, "\u{e9}clair".as_bytes()), Some(3));
        assert_eq!(search(&sorted, b"Zed"), Some(0));
        assert_eq!(search(&sorted, b"zed"), None);
    }
}
