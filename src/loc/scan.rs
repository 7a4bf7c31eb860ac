//! Scan and constrained-scan directory names.
//!
//! Scans are keyed by their coordinate names (branch) and the scanned
//! values (leaf). Values are formatted to 2 decimal places with Rust's
//! `{:.2}`, which rounds the IEEE value half-to-even; that fixed policy is
//! what keeps value-derived names collision-free across callers.

use crate::error::Error;
use crate::hash::short_hash_coords;
use std::collections::HashMap;

/// Scan trunk directory name.
pub fn scan_trunk() -> &'static str {
    "SCANS"
}

/// Scan branch directory name: coordinate names sorted lexicographically.
pub fn scan_branch(coo_names: &[&str]) -> String {
    let mut names: Vec<&str> = coo_names.to_vec();
    names.sort_unstable();
    names.join("_")
}

/// Scan leaf directory name: values in caller order, 2 decimal places.
///
/// The caller supplies values in the order implied by the branch name;
/// they are deliberately not re-sorted here.
pub fn scan_leaf(coo_vals: &[f64]) -> String {
    coo_vals
        .iter()
        .map(|val| format!("{val:.2}"))
        .collect::<Vec<_>>()
        .join("_")
}

/// Constrained scan trunk directory name.
pub fn cscan_trunk() -> &'static str {
    "CSCANS"
}

/// First constrained-scan branch: a hash of the constraint values.
///
/// Constraint coordinate names are sorted by type (`R` bond < `A` angle <
/// `D` dihedral) then by numeric index, values are fixed to 2 decimal
/// places, and the resulting ordered mapping is hashed.
pub fn cscan_branch1(cons_coo_val_dct: &HashMap<String, f64>) -> Result<String, Error> {
    let mut names: Vec<&String> = cons_coo_val_dct.keys().collect();
    let keys: HashMap<&String, (u8, u32)> = names
        .iter()
        .map(|&name| Ok((name, coordinate_sort_key(name)?)))
        .collect::<Result<_, Error>>()?;
    names.sort_by_key(|name| keys[name]);

    let pairs: Vec<(String, f64)> = names
        .into_iter()
        .map(|name| (name.clone(), cons_coo_val_dct[name]))
        .collect();
    Ok(short_hash_coords(&pairs))
}

/// Second constrained-scan branch: same rule as [`scan_branch`], applied
/// to the unconstrained coordinates.
pub fn cscan_branch2(coo_names: &[&str]) -> String {
    scan_branch(coo_names)
}

/// Constrained-scan leaf: same rule as [`scan_leaf`].
pub fn cscan_leaf(coo_vals: &[f64]) -> String {
    scan_leaf(coo_vals)
}

/// Sort key of a coordinate name: type rank, then numeric index.
fn coordinate_sort_key(name: &str) -> Result<(u8, u32), Error> {
    let bad = || Error::BadCoordinateName(name.to_string());
    let mut chars = name.chars();
    let rank = match chars.next() {
        Some('R') => 0,
        Some('A') => 1,
        Some('D') => 2,
        _ => return Err(bad()),
    };
    let num = chars.as_str().parse::<u32>().map_err(|_| bad())?;
    Ok((rank, num))
}
