use serde::{Deserialize, Serialize};

use crate::def::{is_false, is_zero};

/// A reference from a position in `file` to a definition.
///
/// The target definition may live in another repository (`def_repo`), which
/// `normalize` rewrites to its canonical URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Ref {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub def_repo: String,
    pub def_unit_type: String,
    pub def_unit: String,
    pub def_path: String,
    /// True if this reference is the definition site itself.
    #[serde(rename = "Def", skip_serializing_if = "is_false")]
    pub is_def: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub repo: String,
    pub unit_type: String,
    pub unit: String,
    pub file: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub start: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub end: u32,
}
