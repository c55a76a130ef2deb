use serde::{Deserialize, Serialize};
use tracing::debug;

/// A unit of source code a grapher analyzes, e.g. a Go package or a Python distribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SourceUnit {
    pub name: String,
    /// Selects the grapher, e.g. `GoPackage`.
    #[serde(rename = "Type")]
    pub unit_type: String,
    /// Directory of the unit, relative to the repository root.
    pub dir: String,
    /// Files of the unit, relative to the repository root.
    pub files: Vec<String>,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>, unit_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit_type: unit_type.into(),
            ..Self::default()
        }
    }

    /// `name@unit_type`, unique within a repository.
    pub fn id(&self) -> String {
        format!("{}@{}", self.name, self.unit_type)
    }
}

/// Repository metadata passed to graphers.
///
/// Detecting these values from a working copy is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RepoConfig {
    /// Canonical URI of the repository being graphed, see [`graph::make_uri`].
    #[serde(rename = "URI")]
    pub uri: String,
    #[serde(rename = "CloneURL")]
    pub clone_url: String,
    #[serde(rename = "CommitID")]
    pub commit_id: String,
}

/// Returns true if `unit` is selected by `selectors`.
///
/// No selectors selects every unit. Otherwise a selector matches a unit's [`SourceUnit::id`]
/// or its bare name.
pub fn unit_matches_args<S: AsRef<str>>(selectors: &[S], unit: &SourceUnit) -> bool {
    if selectors.is_empty() {
        return true;
    }

    let id = unit.id();
    let matched = selectors
        .iter()
        .map(AsRef::as_ref)
        .any(|s| s == id || s == unit.name);
    if !matched {
        debug!(unit = %id, "skipping source unit");
    }
    matched
}
