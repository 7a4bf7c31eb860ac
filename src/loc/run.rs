//! Run and build directory names.

use crate::error::Error;
use crate::method;

/// Run trunk directory name.
pub fn run_trunk() -> &'static str {
    "RUN"
}

/// Run leaf directory name: the job type truncated to 4 characters,
/// upper-cased. The job must be in the job registry.
pub fn run_leaf(job: &str) -> Result<String, Error> {
    method::validate_job(job)?;
    Ok(job.chars().take(4).collect::<String>().to_uppercase())
}

/// Sub-run leaf directory name: a letter for the macro iteration and a
/// 2-digit zero-padded micro iteration index.
///
/// Macro indices stop at `Z`; 26 or above is an error. (Known limitation,
/// double letters were never needed.)
pub fn subrun_leaf(macro_idx: usize, micro_idx: usize) -> Result<String, Error> {
    if macro_idx >= 26 {
        return Err(Error::index_out_of_range(macro_idx, 25));
    }
    let macro_char = char::from(b'A' + macro_idx as u8);
    Ok(format!("{macro_char}{micro_idx:02}"))
}

/// Build trunk directory name: upper-cased, truncated to 4 characters.
pub fn build_trunk(head: &str) -> String {
    head.to_uppercase().chars().take(4).collect()
}

/// Build branch directory name: upper-cased.
pub fn build_branch(s: &str) -> String {
    s.to_uppercase()
}

/// Build leaf directory name.
pub fn build_leaf(num: usize) -> String {
    num.to_string()
}

/// Next build number under the bounded rollover scheme.
pub fn next_build_number(num: usize) -> usize {
    num % 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trunk_is_fixed() {
        assert_eq!(run_trunk(), "RUN");
    }

    #[test]
    fn run_leaf_truncates_and_uppercases() {
        assert_eq!(run_leaf("energy").unwrap(), "ENER");
        assert_eq!(run_leaf("optimization").unwrap(), "OPTI");
        // shorter than 4 characters stays short
        assert_eq!(run_leaf("irc").unwrap(), "IRC");
    }

    #[test]
    fn run_leaf_rejects_unknown_jobs() {
        assert!(matches!(run_leaf("dance"), Err(Error::UnknownJob(_))));
    }

    #[test]
    fn subrun_leaf_combines_letter_and_padded_index() {
        assert_eq!(subrun_leaf(0, 3).unwrap(), "A03");
        assert_eq!(subrun_leaf(25, 0).unwrap(), "Z00");
        assert_eq!(subrun_leaf(1, 42).unwrap(), "B42");
    }

    #[test]
    fn subrun_leaf_rejects_macro_index_past_z() {
        assert!(matches!(
            subrun_leaf(26, 0),
            Err(Error::IndexOutOfRange { value: 26, max: 25 })
        ));
    }

    #[test]
    fn build_names_normalize_case() {
        assert_eq!(build_trunk("geometry"), "GEOM");
        assert_eq!(build_trunk("zma"), "ZMA");
        assert_eq!(build_branch("conf"), "CONF");
        assert_eq!(build_leaf(7), "7");
    }

    #[test]
    fn build_number_rolls_over_at_ten() {
        assert_eq!(next_build_number(0), 0);
        assert_eq!(next_build_number(9), 9);
        assert_eq!(next_build_number(10), 0);
        assert_eq!(next_build_number(123), 3);
    }
}
