//! Species-level directory names.
//!
//! A species is addressed by its canonical identifier, molecular charge
//! and spin multiplicity. The leaf is a 5-segment path: formula, the first
//! hash-key block, charge, multiplicity, and the second hash-key block.
//! Multi-species reactant sides join their identifiers into one composite
//! identifier before hashing.

use crate::chem::inchi;
use crate::config::NamingConfig;
use crate::error::Error;
use std::path::PathBuf;

/// One chemical species: canonical identifier, charge, multiplicity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Species {
    /// Canonical identifier string.
    pub ich: String,
    /// Molecular charge.
    pub chg: i32,
    /// Spin multiplicity.
    pub mul: u32,
}

impl Species {
    pub fn new(ich: impl Into<String>, chg: i32, mul: u32) -> Self {
        Self {
            ich: ich.into(),
            chg,
            mul,
        }
    }
}

/// Species trunk directory name.
pub fn species_trunk() -> &'static str {
    "SPC"
}

/// Species leaf directory name.
///
/// Safe mode additionally checks that the identifier is in standard,
/// complete canonical form; the multiplicity check always runs.
pub fn species_leaf(cfg: &NamingConfig, ich: &str, chg: i32, mul: u32) -> Result<PathBuf, Error> {
    if cfg.safe_mode {
        check_canonical(ich)?;
    }
    inchi::validate_multiplicity(ich, chg, mul)?;

    let fml = inchi::formula_layer(ich)?.to_string();
    let key = inchi::hash_key(ich);
    Ok([fml, key.first, chg.to_string(), mul.to_string(), key.second]
        .iter()
        .collect())
}

/// Reactant leaf directory name for one side of a reaction.
///
/// The species must already be in canonical identifier order (checked in
/// safe mode); charges and multiplicities appear underscore-joined in the
/// same relative order as the identifiers.
pub fn reactant_leaf(cfg: &NamingConfig, species: &[Species]) -> Result<PathBuf, Error> {
    if cfg.safe_mode {
        for spc in species {
            check_canonical(&spc.ich)?;
        }
        if !species.windows(2).all(|w| w[0].ich <= w[1].ich) {
            let ichs = species.iter().map(|s| s.ich.clone()).collect();
            return Err(Error::UnsortedReactants(ichs));
        }
    }
    for spc in species {
        inchi::validate_multiplicity(&spc.ich, spc.chg, spc.mul)?;
    }

    let ichs: Vec<String> = species.iter().map(|s| s.ich.clone()).collect();
    let joined = inchi::join(&ichs)?;
    let fml = inchi::formula_layer(&joined)?.to_string();
    let key = inchi::hash_key(&joined);
    let chg_str = join_ints(species.iter().map(|s| s.chg.to_string()));
    let mul_str = join_ints(species.iter().map(|s| s.mul.to_string()));
    Ok([fml, key.first, chg_str, mul_str, key.second].iter().collect())
}

fn join_ints(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join("_")
}

fn check_canonical(ich: &str) -> Result<(), Error> {
    if !inchi::is_standard_form(ich) {
        return Err(Error::NonStandardIdentifier(ich.to_string()));
    }
    if !inchi::is_complete(ich) {
        return Err(Error::IncompleteIdentifier(ich.to_string()));
    }
    Ok(())
}
