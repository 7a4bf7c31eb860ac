//! Random string identifiers.
//!
//! Conformer, ring and tau directories are keyed by opaque random tokens
//! rather than derived names. The token format is fixed: 6 ASCII
//! alphanumeric characters (mixed case and digits), which gives 62^6 ≈
//! 5.7e10 possible values, enough to make collisions within one data store
//! negligible.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of a random string identifier, excluding any type tag.
pub const RANDOM_ID_LEN: usize = 6;

/// Generates a new random string identifier.
pub fn random_string_identifier() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_ID_LEN)
        .map(char::from)
        .collect()
}

/// Whether `s` is a well-formed random string identifier.
pub fn is_random_string_identifier(s: &str) -> bool {
    s.len() == RANDOM_ID_LEN && s.chars().all(|c| c.is_ascii_alphanumeric())
}
