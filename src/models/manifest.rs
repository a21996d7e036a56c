//! Pack-level manifest configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_KEYWORD_PREFIX, DEFAULT_KEYWORD_SUFFIX};

/// Pack-wide keyword settings applied by the destination application.
///
/// The prefix and suffix live exactly once, in the pack manifest; they are
/// never concatenated into individual snippet keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackManifest {
    /// Prefix prepended to every keyword at lookup time (e.g., ";")
    pub keyword_prefix: String,
    /// Suffix appended to every keyword at lookup time (often empty)
    pub keyword_suffix: String,
}

impl PackManifest {
    /// Creates a manifest with the given prefix and suffix.
    #[must_use]
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            keyword_prefix: prefix.into(),
            keyword_suffix: suffix.into(),
        }
    }
}

impl Default for PackManifest {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORD_PREFIX, DEFAULT_KEYWORD_SUFFIX)
    }
}
