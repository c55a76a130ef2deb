use serde::{Deserialize, Serialize};

use crate::{Def, Doc, Ref};

/// Everything one grapher run produced for one source unit.
///
/// Sequences are in insertion order until [`crate::sort`] runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Output {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub defs: Vec<Def>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub refs: Vec<Ref>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<Doc>,
}

impl Output {
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty() && self.refs.is_empty() && self.docs.is_empty()
    }

    /// Total number of spans across all three sequences.
    pub fn len(&self) -> usize {
        self.defs.len() + self.refs.len() + self.docs.len()
    }
}
