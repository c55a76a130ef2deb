use serde::{Deserialize, Serialize};

/// Identity of a definition: the repository, source unit and path it lives at.
///
/// An empty `repo` means "the repository currently being graphed".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DefKey {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub repo: String,
    pub unit_type: String,
    pub unit: String,
    pub path: String,
}

/// A symbol definition emitted by a grapher.
///
/// `def_start`/`def_end` are the position of the definition in `file`. Before
/// offset translation they may be codepoint ordinals; afterwards they are
/// UTF-8 byte offsets, half-open `[def_start, def_end)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Def {
    #[serde(flatten)]
    pub key: DefKey,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub file: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub def_start: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub def_end: u32,
    #[serde(skip_serializing_if = "is_false")]
    pub exported: bool,
    /// Grapher-specific metadata. Never inspected or ordered on.
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub data: serde_json::Value,
}

pub(crate) fn is_zero(n: &u32) -> bool {
    *n == 0
}

pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}
