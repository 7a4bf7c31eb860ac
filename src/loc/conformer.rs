//! Sample identifiers and fixed trunk names.
//!
//! Conformer, ring and tau directories are keyed by opaque random tokens
//! tagged with a type character (`r` ring, `c` conformer, `t` tau). The
//! naming layer only ever checks the tag and token shape; the tokens are
//! never interpreted. This module also holds the fixed trunk names shared
//! by the species and reaction file systems.

use crate::error::Error;
use crate::ident;

/// Conformer trunk directory name.
pub fn conformer_trunk() -> &'static str {
    "CONFS"
}

/// Ring-conformer branch directory name; `rid` must be tagged `r`.
pub fn conformer_branch(rid: &str) -> Result<String, Error> {
    tagged_identifier('r', rid)
}

/// Torsion-conformer leaf directory name; `cid` must be tagged `c`.
pub fn conformer_leaf(cid: &str) -> Result<String, Error> {
    tagged_identifier('c', cid)
}

/// Generates a new conformer identifier.
pub fn generate_new_conformer_id() -> String {
    format!("c{}", ident::random_string_identifier())
}

/// Generates a new ring identifier.
pub fn generate_new_ring_id() -> String {
    format!("r{}", ident::random_string_identifier())
}

/// Tau trunk directory name.
pub fn tau_trunk() -> &'static str {
    "TAU"
}

/// Tau leaf directory name; `tid` must be tagged `t`.
pub fn tau_leaf(tid: &str) -> Result<String, Error> {
    tagged_identifier('t', tid)
}

/// Generates a new tau identifier.
pub fn generate_new_tau_id() -> String {
    format!("t{}", ident::random_string_identifier())
}

/// Single point trunk directory name.
pub fn single_point_trunk() -> &'static str {
    "SP"
}

/// High-spin single point trunk directory name.
pub fn high_spin_trunk() -> &'static str {
    "HS"
}

/// Symmetric-conformer trunk directory name.
pub fn symmetry_trunk() -> &'static str {
    "SYM"
}

/// Zmatrix trunk directory name.
pub fn zmatrix_trunk() -> &'static str {
    "Z"
}

/// Zmatrix leaf directory name.
pub fn zmatrix_leaf(num: usize) -> Result<String, Error> {
    super::two_digit_leaf(num)
}

/// Energy transfer trunk directory name.
pub fn energy_transfer_trunk() -> &'static str {
    "ETRANS"
}

/// VRC-TST trunk directory name.
pub fn vrctst_trunk() -> &'static str {
    "VRC"
}

/// VRC-TST leaf directory name.
pub fn vrctst_leaf(num: usize) -> Result<String, Error> {
    super::two_digit_leaf(num)
}

/// Validates a tagged random identifier and echoes it back.
fn tagged_identifier(tag: char, id: &str) -> Result<String, Error> {
    let suffix = id.strip_prefix(tag).ok_or_else(|| Error::WrongIdentifierTag {
        expected: tag,
        id: id.to_string(),
    })?;
    if !ident::is_random_string_identifier(suffix) {
        return Err(Error::MalformedRandomIdentifier(id.to_string()));
    }
    Ok(id.to_string())
}
