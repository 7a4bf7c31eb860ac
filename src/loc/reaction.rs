//! Reaction-level directory names.
//!
//! A reaction is two reactant sides plus a transition-state multiplicity.
//! Naming must be orientation-independent: a reaction and its formal
//! reverse map to the same directory. That is achieved by sorting each
//! side's species canonically and then ordering the two sides by a total
//! order on their sortable representations.

use super::species::{reactant_leaf, Species};
use crate::config::NamingConfig;
use crate::error::Error;
use std::path::PathBuf;

/// Reaction trunk directory name.
pub fn reaction_trunk() -> &'static str {
    "RXN"
}

/// Whether the canonical orientation of the reaction swaps its two sides.
pub fn reaction_is_reversed(sides: &[Vec<Species>; 2]) -> bool {
    canonicalize(sides).0
}

/// Reorders a reaction into canonical form: species sorted within each
/// side, sides ordered by their sortable representations.
///
/// Idempotent: applying it to its own output returns the same value.
pub fn sort_together(sides: &[Vec<Species>; 2]) -> [Vec<Species>; 2] {
    canonicalize(sides).1
}

/// Reaction leaf directory name.
///
/// The two reactant-leaf paths are joined and terminated with the
/// transition-state multiplicity. Safe mode checks that the input is
/// already in canonical orientation.
pub fn reaction_leaf(
    cfg: &NamingConfig,
    sides: &[Vec<Species>; 2],
    ts_mul: u32,
) -> Result<PathBuf, Error> {
    if cfg.safe_mode && *sides != sort_together(sides) {
        return Err(Error::NonCanonicalReaction);
    }
    let leaf1 = reactant_leaf(cfg, &sides[0])?;
    let leaf2 = reactant_leaf(cfg, &sides[1])?;
    Ok(leaf1.join(leaf2).join(ts_mul.to_string()))
}

/// Transition state trunk directory name.
pub fn transition_state_trunk() -> &'static str {
    "TS"
}

/// Transition state leaf directory name.
pub fn transition_state_leaf(num: usize) -> Result<String, Error> {
    super::two_digit_leaf(num)
}

/// Sorts each side canonically and decides the side order.
///
/// The sortable representation of a side is (species count, identifiers,
/// charges, multiplicities), compared lexicographically; the side with the
/// smaller representation comes first. Both public entry points share this
/// routine so the ordering decision and the reordering can never disagree.
fn canonicalize(sides: &[Vec<Species>; 2]) -> (bool, [Vec<Species>; 2]) {
    let mut side1 = sides[0].clone();
    let mut side2 = sides[1].clone();
    side1.sort_by(|a, b| a.ich.cmp(&b.ich));
    side2.sort_by(|a, b| a.ich.cmp(&b.ich));

    let reversed = representation(&side1) > representation(&side2);
    if reversed {
        (true, [side2, side1])
    } else {
        (false, [side1, side2])
    }
}

type Representation<'a> = (usize, Vec<&'a str>, Vec<i32>, Vec<u32>);

fn representation(side: &[Species]) -> Representation<'_> {
    (
        side.len(),
        side.iter().map(|s| s.ich.as_str()).collect(),
        side.iter().map(|s| s.chg).collect(),
        side.iter().map(|s| s.mul).collect(),
    )
}
