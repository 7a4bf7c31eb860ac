//! Configuration for the naming functions.
//!
//! Validation strictness is an explicit value passed to the functions
//! that consult it rather than a process-wide switch, so it can be set
//! per call without mutating shared state.

use serde::{Deserialize, Serialize};

/// Validation strictness for the naming functions.
///
/// With `safe_mode` enabled, the species and reaction naming functions run
/// extra invariant checks (canonical identifier form, pre-sorted reactant
/// lists, canonical reaction orientation) that are skipped in production
/// for speed. Cheap format checks always run regardless of this flag.
///
/// # Examples
///
/// ```
/// use chemloc::NamingConfig;
///
/// let relaxed = NamingConfig::default();
/// assert!(!relaxed.safe_mode);
///
/// let strict = NamingConfig { safe_mode: true };
/// assert!(strict.safe_mode);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Run the expensive invariant checks.
    #[serde(default)]
    pub safe_mode: bool,
}

impl NamingConfig {
    /// Configuration with safe mode enabled.
    pub fn strict() -> Self {
        Self { safe_mode: true }
    }
}
