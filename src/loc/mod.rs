//! Directory-name mappings for the hierarchical data store.
//!
//! Each submodule covers one family of path levels. All functions are
//! pure: they validate their inputs and return either a single path
//! segment (`String`) or a joined multi-segment path (`PathBuf`), never
//! touching the file system themselves.

mod conformer;
mod reaction;
mod run;
mod scan;
mod species;
mod theory;

pub use conformer::{
    conformer_branch, conformer_leaf, conformer_trunk, energy_transfer_trunk,
    generate_new_conformer_id, generate_new_ring_id, generate_new_tau_id, high_spin_trunk,
    single_point_trunk, symmetry_trunk, tau_leaf, tau_trunk, vrctst_leaf, vrctst_trunk,
    zmatrix_leaf, zmatrix_trunk,
};
pub use reaction::{
    reaction_is_reversed, reaction_leaf, reaction_trunk, sort_together, transition_state_leaf,
    transition_state_trunk,
};
pub use run::{build_branch, build_leaf, build_trunk, next_build_number, run_leaf, run_trunk, subrun_leaf};
pub use scan::{cscan_branch1, cscan_branch2, cscan_leaf, cscan_trunk, scan_branch, scan_leaf, scan_trunk};
pub use species::{reactant_leaf, species_leaf, species_trunk, Species};
pub use theory::{theory_leaf, OrbitalSpec};

use crate::error::Error;

/// Formats a numeric leaf index as a 2-digit zero-padded string.
///
/// Shared by the transition-state, zmatrix and VRC-TST levels, all of
/// which cap their indices at 99.
pub(crate) fn two_digit_leaf(num: usize) -> Result<String, Error> {
    if num > 99 {
        return Err(Error::index_out_of_range(num, 99));
    }
    Ok(format!("{num:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_digit_leaf_zero_pads() {
        assert_eq!(two_digit_leaf(0).unwrap(), "00");
        assert_eq!(two_digit_leaf(7).unwrap(), "07");
        assert_eq!(two_digit_leaf(99).unwrap(), "99");
    }

    #[test]
    fn two_digit_leaf_round_trips() {
        for n in 0..=99 {
            let leaf = two_digit_leaf(n).unwrap();
            assert_eq!(leaf.parse::<usize>().unwrap(), n);
        }
    }

    #[test]
    fn two_digit_leaf_rejects_out_of_range() {
        assert!(two_digit_leaf(100).is_err());
        assert!(two_digit_leaf(usize::MAX).is_err());
    }
}
