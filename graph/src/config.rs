use serde::{Deserialize, Serialize};

/// Configuration knobs for [`crate::translate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    /// Log a warning (rather than a debug event) when a span names a file that does not
    /// exist under the root. Logged once per file per pass.
    pub warn_missing_files: bool,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            warn_missing_files: true,
        }
    }
}

/// Configuration knobs for [`crate::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Rewrite every non-empty `Ref::def_repo` to its canonical repository URI.
    pub canonicalize_def_repos: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            canonicalize_def_repos: true,
        }
    }
}
