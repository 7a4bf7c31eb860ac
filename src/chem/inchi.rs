//! Canonical chemical identifier support.
//!
//! Identifiers are canonical InChI-style strings: the standard prefix
//! `InChI=1S/`, a formula layer, then optional `/`-separated sublayers,
//! each tagged by a single letter (`c` connectivity, `h` hydrogens, `b/t/m/s`
//! stereo, `q` charge, `p` protonation, `i` isotope). This module provides
//! everything the naming functions need from an identifier: form checks,
//! formula extraction, a two-part hash key, multi-component joining, and
//! the electron-parity multiplicity rule.

use super::formula;
use crate::error::Error;
use sha2::{Digest, Sha256};

/// Standard canonical identifier prefix.
const STD_PREFIX: &str = "InChI=1S/";

/// Sublayer tags in canonical order.
const LAYER_TAGS: [char; 9] = ['c', 'h', 'b', 't', 'm', 's', 'q', 'p', 'i'];

/// Number of characters in the first hash-key block.
const KEY_FIRST_LEN: usize = 14;

/// Number of characters in the second hash-key block.
const KEY_SECOND_LEN: usize = 10;

/// Two-part hash key of a canonical identifier.
///
/// Both blocks are derived from the SHA-256 digest of the identifier
/// string, mapped byte-wise into `A–Z`, so they are deterministic,
/// filesystem-safe and collision-resistant. The two blocks are used at
/// different levels of the directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashKey {
    /// 14-letter block for the upper path level.
    pub first: String,
    /// 10-letter block for the leaf path level.
    pub second: String,
}

/// Whether the identifier carries the standard canonical prefix.
pub fn is_standard_form(ich: &str) -> bool {
    ich.starts_with(STD_PREFIX)
}

/// Whether the identifier is complete: standard form with a formula layer
/// whose every component parses as a molecular formula.
pub fn is_complete(ich: &str) -> bool {
    match formula_layer(ich) {
        Ok(fml) => formula::parse(fml).is_ok(),
        Err(_) => false,
    }
}

/// The formula layer of a standard-form identifier.
pub fn formula_layer(ich: &str) -> Result<&str, Error> {
    let rest = ich
        .strip_prefix(STD_PREFIX)
        .ok_or_else(|| Error::NonStandardIdentifier(ich.to_string()))?;
    let fml = rest.split('/').next().unwrap_or("");
    if fml.is_empty() {
        return Err(Error::malformed_identifier(ich, "missing formula layer"));
    }
    Ok(fml)
}

/// Deterministic two-part hash key of an identifier string.
pub fn hash_key(ich: &str) -> HashKey {
    let digest = Sha256::digest(ich.as_bytes());
    let letters = |bytes: &[u8]| -> String {
        bytes.iter().map(|b| char::from(b'A' + b % 26)).collect()
    };
    HashKey {
        first: letters(&digest[..KEY_FIRST_LEN]),
        second: letters(&digest[KEY_FIRST_LEN..KEY_FIRST_LEN + KEY_SECOND_LEN]),
    }
}

/// Joins component identifiers into one composite identifier.
///
/// Formula layers are joined with `.` in the given order; each sublayer
/// tag present in any component is joined across components with `;`,
/// components lacking that layer contributing empty slots. The result is
/// itself a standard-form identifier.
pub fn join(ichs: &[String]) -> Result<String, Error> {
    if ichs.is_empty() {
        return Err(Error::malformed_identifier("", "cannot join zero identifiers"));
    }
    if ichs.len() == 1 {
        return Ok(ichs[0].clone());
    }

    let mut formulas = Vec::with_capacity(ichs.len());
    let mut layer_maps = Vec::with_capacity(ichs.len());
    for ich in ichs {
        formulas.push(formula_layer(ich)?.to_string());
        layer_maps.push(sublayers(ich));
    }

    let mut joined = format!("{STD_PREFIX}{}", formulas.join("."));
    for tag in LAYER_TAGS {
        if layer_maps.iter().any(|lyr| lookup(lyr, tag).is_some()) {
            let slots: Vec<&str> = layer_maps
                .iter()
                .map(|lyr| lookup(lyr, tag).unwrap_or(""))
                .collect();
            joined.push('/');
            joined.push(tag);
            joined.push_str(&slots.join(";"));
        }
    }
    Ok(joined)
}

/// Validates a spin multiplicity against the identifier and charge.
///
/// Electron parity rule: with `n` electrons (nuclear charge sum minus the
/// molecular charge), a multiplicity `m >= 1` is possible iff `n + m` is
/// odd and the implied number of unpaired electrons does not exceed `n`.
pub fn validate_multiplicity(ich: &str, chg: i32, mul: u32) -> Result<(), Error> {
    let fml = formula_layer(ich)?;
    let nelec = formula::electron_count(fml, chg)?;
    let valid = mul >= 1 && (nelec + mul) % 2 == 1 && mul - 1 <= nelec;
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_multiplicity(ich, chg, mul))
    }
}

fn sublayers(ich: &str) -> Vec<(char, &str)> {
    let rest = ich.strip_prefix(STD_PREFIX).unwrap_or(ich);
    rest.split('/')
        .skip(1)
        .filter_map(|seg| {
            let tag = seg.chars().next()?;
            Some((tag, &seg[tag.len_utf8()..]))
        })
        .collect()
}

fn lookup<'a>(layers: &[(char, &'a str)], tag: char) -> Option<&'a str> {
    layers
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, val)| *val)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETHANOL: &str = "InChI=1S/C2H6O/c1-2-3/h3H,2H2,1H3";
    const WATER: &str = "InChI=1S/H2O/h1H2";
    const OH: &str = "InChI=1S/HO/h1H";

    #[test]
    fn standard_form_requires_prefix() {
        assert!(is_standard_form(ETHANOL));
        assert!(!is_standard_form("InChI=1/C2H6O/c1-2-3/h3H,2H2,1H3"));
        assert!(!is_standard_form("C2H6O"));
    }

    #[test]
    fn completeness_requires_parsable_formula() {
        assert!(is_complete(ETHANOL));
        assert!(is_complete(WATER));
        assert!(!is_complete("InChI=1S/"));
        assert!(!is_complete("InChI=1S/c1-2-3"));
        assert!(!is_complete("not an identifier"));
    }

    #[test]
    fn extracts_formula_layer() {
        assert_eq!(formula_layer(ETHANOL).unwrap(), "C2H6O");
        assert_eq!(formula_layer(WATER).unwrap(), "H2O");
        assert!(formula_layer("C2H6O").is_err());
    }

    #[test]
    fn hash_key_is_deterministic_and_shaped() {
        let key = hash_key(ETHANOL);
        assert_eq!(key, hash_key(ETHANOL));
        assert_eq!(key.first.len(), 14);
        assert_eq!(key.second.len(), 10);
        assert!(key.first.chars().all(|c| c.is_ascii_uppercase()));
        assert!(key.second.chars().all(|c| c.is_ascii_uppercase()));
        assert_ne!(key, hash_key(WATER));
    }

    #[test]
    fn join_merges_formulas_and_layers() {
        let joined = join(&[ETHANOL.to_string(), WATER.to_string()]).unwrap();
        assert_eq!(joined, "InChI=1S/C2H6O.H2O/c1-2-3;/h3H,2H2,1H3;1H2");
        assert!(is_standard_form(&joined));
        assert_eq!(formula_layer(&joined).unwrap(), "C2H6O.H2O");
    }

    #[test]
    fn join_of_single_identifier_is_identity() {
        assert_eq!(join(&[WATER.to_string()]).unwrap(), WATER);
    }

    #[test]
    fn join_of_nothing_fails() {
        assert!(join(&[]).is_err());
    }

    #[test]
    fn multiplicity_parity_rule() {
        // water: 10 electrons, singlet ok, doublet impossible
        assert!(validate_multiplicity(WATER, 0, 1).is_ok());
        assert!(validate_multiplicity(WATER, 0, 2).is_err());
        assert!(validate_multiplicity(WATER, 0, 3).is_ok());
        // hydroxyl radical: 9 electrons, doublet ok, singlet impossible
        assert!(validate_multiplicity(OH, 0, 2).is_ok());
        assert!(validate_multiplicity(OH, 0, 1).is_err());
        // charge shifts the parity
        assert!(validate_multiplicity(OH, -1, 1).is_ok());
        assert!(validate_multiplicity(OH, 1, 1).is_ok());
    }

    #[test]
    fn multiplicity_zero_is_invalid() {
        assert!(validate_multiplicity(WATER, 0, 0).is_err());
    }

    #[test]
    fn unpaired_electrons_cannot_exceed_total() {
        // atomic hydrogen: one electron, triplet impossible
        assert!(validate_multiplicity("InChI=1S/H", 0, 3).is_err());
        assert!(validate_multiplicity("InChI=1S/H", 0, 2).is_ok());
    }
}
