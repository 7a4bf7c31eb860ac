//! Electronic structure method, basis set, and job type registries.
//!
//! Theory and run directory names must only ever be derived from known
//! names: an unrecognized method, basis or job is a caller bug, not a new
//! directory. Membership is case-insensitive throughout, since the naming
//! layer lowercases everything before hashing.

use crate::error::Error;

/// Core electronic structure methods recognized by the naming layer.
const METHODS: &[&str] = &[
    // Hartree-Fock
    "hf",
    "rhf",
    "uhf",
    "rohf",
    // density functionals
    "b3lyp",
    "b2plypd3",
    "wb97xd",
    "m062x",
    "m06hf",
    "pbe",
    "pbe0",
    "b97d3",
    // perturbation theory and coupled cluster
    "mp2",
    "mp4",
    "ccsd",
    "ccsd(t)",
    "ccsdt",
    "ccsd(t)-f12",
    "ccsdt-f12",
    // multireference
    "casscf",
    "caspt2",
    "mrci",
    "mrci+q",
];

/// Basis sets recognized by the naming layer.
const BASES: &[&str] = &[
    // Pople
    "sto-3g",
    "3-21g",
    "6-31g",
    "6-31g*",
    "6-31g**",
    "6-31+g*",
    "6-311g**",
    "6-311++g**",
    // Dunning correlation-consistent
    "cc-pvdz",
    "cc-pvtz",
    "cc-pvqz",
    "cc-pv5z",
    "aug-cc-pvdz",
    "aug-cc-pvtz",
    "aug-cc-pvqz",
    "jun-cc-pvdz",
    "jun-cc-pvtz",
    "cc-pvdz-f12",
    "cc-pvtz-f12",
    // Karlsruhe
    "def2-svp",
    "def2-tzvp",
    "def2-qzvp",
];

/// Method prefix modifiers, stripped from the front of a method name.
const METHOD_PREFIXES: &[&str] = &["df", "ri", "loc", "sf", "cp"];

/// Job types recognized by the run file system.
const JOBS: &[&str] = &[
    "energy",
    "gradient",
    "hessian",
    "optimization",
    "irc",
    "vpt2",
    "molecular_properties",
];

/// Splits a method name into its core method and ordered prefix modifiers.
///
/// Prefixes are leading `-`-separated tags from a fixed set, e.g.
/// `DF-RI-CCSD(T)` decomposes to (`CCSD(T)`, `["DF", "RI"]`). A name with
/// no leading tag is its own core with no prefixes.
pub fn decompose_method(method: &str) -> (&str, Vec<&str>) {
    let mut core = method;
    let mut prefixes = Vec::new();
    while let Some((head, tail)) = core.split_once('-') {
        if METHOD_PREFIXES.contains(&head.to_lowercase().as_str()) && !tail.is_empty() {
            prefixes.push(head);
            core = tail;
        } else {
            break;
        }
    }
    (core, prefixes)
}

/// Checks that `method` is a registered core method.
pub fn validate_method(method: &str) -> Result<(), Error> {
    if METHODS.contains(&method.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(Error::UnknownMethod(method.to_string()))
    }
}

/// Checks that `basis` is a registered basis set.
pub fn validate_basis(basis: &str) -> Result<(), Error> {
    if BASES.contains(&basis.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(Error::UnknownBasis(basis.to_string()))
    }
}

/// Checks that `job` is a registered job type.
pub fn validate_job(job: &str) -> Result<(), Error> {
    if JOBS.contains(&job.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(Error::UnknownJob(job.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_case_insensitive() {
        assert!(validate_method("UHF").is_ok());
        assert!(validate_method("ccsd(t)").is_ok());
        assert!(validate_basis("CC-PVDZ").is_ok());
        assert!(validate_job("ENERGY").is_ok());
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!(
            validate_method("not-a-method"),
            Err(Error::UnknownMethod(_))
        ));
        assert!(matches!(
            validate_basis("cc-pv9z"),
            Err(Error::UnknownBasis(_))
        ));
        assert!(matches!(validate_job("dance"), Err(Error::UnknownJob(_))));
    }

    #[test]
    fn decomposes_prefixed_methods() {
        assert_eq!(decompose_method("DF-MP2"), ("MP2", vec!["DF"]));
        assert_eq!(
            decompose_method("DF-RI-CCSD(T)"),
            ("CCSD(T)", vec!["DF", "RI"])
        );
        assert_eq!(decompose_method("df-mp2"), ("mp2", vec!["df"]));
    }

    #[test]
    fn unprefixed_methods_decompose_to_themselves() {
        assert_eq!(decompose_method("UHF"), ("UHF", vec![]));
        // the hyphen here belongs to the core name, not a prefix
        assert_eq!(decompose_method("ccsd(t)-f12"), ("ccsd(t)-f12", vec![]));
        assert_eq!(decompose_method("cc-pvdz"), ("cc-pvdz", vec![]));
    }
}
