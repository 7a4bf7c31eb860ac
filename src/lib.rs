//! Deterministic directory naming for hierarchical chemistry data stores.
//!
//! Maps scientific identifiers — canonical chemical identifiers with charge
//! and multiplicity, electronic structure methods and basis sets, scan
//! coordinates, random sample tokens — onto canonical, collision-resistant
//! directory names for a structured on-disk data store. Every function is a
//! pure, synchronous computation: validate the inputs, derive the name,
//! return it. The file-system layer that consumes these names lives
//! elsewhere.
//!
//! # Features
//!
//! - **Species & reaction naming** — formula plus hashed identifier paths;
//!   reaction names are orientation-independent, so a reaction and its
//!   reverse share a directory
//! - **Theory naming** — compact hashes of method, basis and orbital
//!   treatment, with method-prefix modifiers hashed separately
//! - **Sample identifiers** — tagged random tokens for conformer, ring and
//!   tau directories
//! - **Scan naming** — canonicalized coordinate names and 2-decimal value
//!   formatting, with constraint sets hashed to a fixed-length fragment
//!
//! # Quick Start
//!
//! ```
//! use chemloc::{species_leaf, species_trunk, theory_leaf, NamingConfig, OrbitalSpec};
//!
//! let cfg = NamingConfig::default();
//!
//! // C2H5OH at charge 0, singlet
//! let ich = "InChI=1S/C2H6O/c1-2-3/h3H,2H2,1H3";
//! let leaf = species_leaf(&cfg, ich, 0, 1)?;
//! assert!(leaf.starts_with("C2H6O"));
//! assert_eq!(species_trunk(), "SPC");
//!
//! // same theory directory regardless of name case
//! let a = theory_leaf("UHF", "cc-pvdz", &OrbitalSpec::Unrestricted)?;
//! let b = theory_leaf("uhf", "CC-PVDZ", &OrbitalSpec::Unrestricted)?;
//! assert_eq!(a, b);
//! # Ok::<(), chemloc::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - Naming functions are re-exported at the crate root, grouped internally
//!   by path family (species, reaction, theory, conformer, scan, run)
//! - [`chem`] — canonical identifier support (form checks, formulas,
//!   hash keys, the multiplicity parity rule)
//! - [`method`] — method/basis/job registries and prefix decomposition
//! - [`hash`] — the short-hash utility behind every hashed segment
//! - [`ident`] — random string identifier generation and validation
//!
//! # Validation
//!
//! Precondition violations surface as [`Error`] values naming the violated
//! invariant. [`NamingConfig`] controls safe mode: the expensive canonical
//! form checks run only when it is enabled, cheap format checks always run.

mod config;
mod error;
mod loc;

pub mod chem;
pub mod hash;
pub mod ident;
pub mod method;

pub use config::NamingConfig;
pub use error::Error;

pub use loc::{
    build_branch, build_leaf, build_trunk, conformer_branch, conformer_leaf, conformer_trunk,
    cscan_branch1, cscan_branch2, cscan_leaf, cscan_trunk, energy_transfer_trunk,
    generate_new_conformer_id, generate_new_ring_id, generate_new_tau_id, high_spin_trunk,
    next_build_number, reactant_leaf, reaction_is_reversed, reaction_leaf, reaction_trunk,
    run_leaf, run_trunk, scan_branch, scan_leaf, scan_trunk, single_point_trunk, sort_together,
    species_leaf, species_trunk, subrun_leaf, symmetry_trunk, tau_leaf, tau_trunk, theory_leaf,
    transition_state_leaf, transition_state_trunk, vrctst_leaf, vrctst_trunk, zmatrix_leaf,
    zmatrix_trunk, OrbitalSpec, Species,
};
