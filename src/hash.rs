//! Short deterministic hashes for path segments.
//!
//! Directory names embed fixed-length digests of canonicalized keys to stay
//! compact while remaining collision-resistant for the small value spaces
//! involved. All hashes are SHA-256 based; truncation lengths and case
//! rules are fixed here so every caller produces identical segments.

use sha2::{Digest, Sha256};

/// Length of a short hash fragment in hex characters.
const SHORT_HASH_LEN: usize = 5;

/// Short hash of a string: the first 5 lowercase hex characters of its
/// SHA-256 digest.
///
/// Case sensitivity is the caller's concern; callers that want
/// case-insensitive segments lowercase their input first.
pub fn short_hash(s: &str) -> String {
    let digest = Sha256::digest(s.as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(SHORT_HASH_LEN);
    hex
}

/// Short hash of an integer pair, over the canonical `"{a},{b}"`
/// serialization.
pub fn short_hash_pair(a: u32, b: u32) -> String {
    short_hash(&format!("{a},{b}"))
}

/// Short hash of ordered coordinate (name, value) pairs.
///
/// Values are formatted to 2 decimal places and pairs are serialized as
/// `name=value` joined with commas, in the order given. Callers sort the
/// pairs canonically before hashing, so the same constraint set always
/// produces the same fragment.
pub fn short_hash_coords(pairs: &[(String, f64)]) -> String {
    let ser = pairs
        .iter()
        .map(|(name, val)| format!("{name}={val:.2}"))
        .collect::<Vec<_>>()
        .join(",");
    short_hash(&ser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hash_is_deterministic() {
        assert_eq!(short_hash("uhf"), short_hash("uhf"));
        assert_ne!(short_hash("uhf"), short_hash("rhf"));
    }

    #[test]
    fn short_hash_has_fixed_length_and_hex_alphabet() {
        for input in ["", "a", "cc-pvdz", "some much longer input string"] {
            let h = short_hash(input);
            assert_eq!(h.len(), 5);
            assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
            assert_eq!(h, h.to_lowercase());
        }
    }

    #[test]
    fn short_hash_is_case_sensitive() {
        assert_ne!(short_hash("UHF"), short_hash("uhf"));
    }

    #[test]
    fn pair_hash_distinguishes_order() {
        assert_ne!(short_hash_pair(5, 4), short_hash_pair(4, 5));
        assert_eq!(short_hash_pair(5, 4), short_hash("5,4"));
    }

    #[test]
    fn coord_hash_uses_two_decimal_formatting() {
        let a = vec![("R1".to_string(), 1.2), ("A2".to_string(), 104.5)];
        let b = vec![("R1".to_string(), 1.201), ("A2".to_string(), 104.5004)];
        assert_eq!(short_hash_coords(&a), short_hash_coords(&b));
        assert_eq!(short_hash_coords(&a), short_hash("R1=1.20,A2=104.50"));
    }

    #[test]
    fn coord_hash_is_order_sensitive() {
        let a = vec![("R1".to_string(), 1.2), ("R2".to_string(), 1.3)];
        let b = vec![("R2".to_string(), 1.3), ("R1".to_string(), 1.2)];
        assert_ne!(short_hash_coords(&a), short_hash_coords(&b));
    }
}
