use serde::{Deserialize, Serialize};

use crate::def::{DefKey, is_zero};

/// Documentation attached to a definition, e.g. a doc comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Doc {
    #[serde(flatten)]
    pub key: DefKey,
    /// MIME type of `data`, e.g. `text/plain` or `text/html`.
    pub format: String,
    pub data: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub file: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub start: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub end: u32,
}
