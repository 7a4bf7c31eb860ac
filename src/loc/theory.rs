//! Theory-level directory names.
//!
//! A level of theory is a method, a basis set and an orbital treatment.
//! Method and basis names are hashed case-insensitively so that `UHF` and
//! `uhf` share a directory; method prefix modifiers contribute their own
//! hash fragment so `DF-MP2` and plain `MP2` do not collide.

use crate::error::Error;
use crate::hash::{short_hash, short_hash_pair};
use crate::method;

/// Orbital treatment for a theory directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrbitalSpec {
    /// Restricted orbitals, literal `R` marker.
    Restricted,
    /// Unrestricted orbitals, literal `U` marker.
    Unrestricted,
    /// Explicit alpha/beta orbital counts, hashed marker.
    Counts {
        /// Number of alpha orbitals.
        alpha: u32,
        /// Number of beta orbitals.
        beta: u32,
    },
}

impl OrbitalSpec {
    /// Path-segment marker for this orbital treatment.
    ///
    /// The hashed form is prefixed with `@` so it can never collide with
    /// the literal `R`/`U` markers.
    fn marker(&self) -> String {
        match self {
            OrbitalSpec::Restricted => "R".to_string(),
            OrbitalSpec::Unrestricted => "U".to_string(),
            OrbitalSpec::Counts { alpha, beta } => {
                format!("@{}", short_hash_pair(*alpha, *beta).to_uppercase())
            }
        }
    }
}

/// Theory leaf directory name.
///
/// Concatenates the prefix hash (with a `-` separator, omitted when the
/// method has no prefix modifiers), the core method hash, the basis hash,
/// and the orbital marker.
pub fn theory_leaf(method_name: &str, basis: &str, orb: &OrbitalSpec) -> Result<String, Error> {
    let (core, prefixes) = method::decompose_method(method_name);

    let prefix_part = if prefixes.is_empty() {
        String::new()
    } else {
        format!("{}-", short_hash(&prefixes.concat().to_lowercase()))
    };

    method::validate_method(core)?;
    method::validate_basis(basis)?;

    Ok(format!(
        "{prefix_part}{}{}{}",
        short_hash(&core.to_lowercase()),
        short_hash(&basis.to_lowercase()),
        orb.marker()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unprefixed_method_has_no_prefix_segment() {
        let leaf = theory_leaf("UHF", "cc-pvdz", &OrbitalSpec::Unrestricted).unwrap();
        let expected = format!("{}{}U", short_hash("uhf"), short_hash("cc-pvdz"));
        assert_eq!(leaf, expected);
    }

    #[test]
    fn name_case_does_not_matter() {
        let a = theory_leaf("B3LYP", "6-31G*", &OrbitalSpec::Restricted).unwrap();
        let b = theory_leaf("b3lyp", "6-31g*", &OrbitalSpec::Restricted).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn prefixed_method_gets_an_extra_segment() {
        let plain = theory_leaf("MP2", "cc-pvtz", &OrbitalSpec::Restricted).unwrap();
        let prefixed = theory_leaf("DF-MP2", "cc-pvtz", &OrbitalSpec::Restricted).unwrap();
        assert_eq!(prefixed, format!("{}-{plain}", short_hash("df")));
    }

    #[test]
    fn orbital_count_marker_cannot_collide_with_literals() {
        let counts = OrbitalSpec::Counts { alpha: 5, beta: 4 };
        let leaf = theory_leaf("UHF", "cc-pvdz", &counts).unwrap();
        let marker = &leaf[leaf.len() - 6..];
        assert!(marker.starts_with('@'));
        assert!(marker[1..].chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn distinct_orbital_counts_give_distinct_leaves() {
        let a = theory_leaf("UHF", "cc-pvdz", &OrbitalSpec::Counts { alpha: 5, beta: 4 }).unwrap();
        let b = theory_leaf("UHF", "cc-pvdz", &OrbitalSpec::Counts { alpha: 4, beta: 5 }).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn unknown_method_and_basis_are_rejected() {
        assert!(matches!(
            theory_leaf("zz9", "cc-pvdz", &OrbitalSpec::Restricted),
            Err(Error::UnknownMethod(_))
        ));
        assert!(matches!(
            theory_leaf("UHF", "cc-pv9z", &OrbitalSpec::Restricted),
            Err(Error::UnknownBasis(_))
        ));
    }

    #[test]
    fn leaf_is_filesystem_safe() {
        let leaf = theory_leaf("DF-CCSD(T)", "aug-cc-pvtz", &OrbitalSpec::Unrestricted).unwrap();
        assert!(leaf
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '@'));
    }
}
