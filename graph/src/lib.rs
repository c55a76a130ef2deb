//! Normalization of grapher output.
//!
//! Pipeline: codepoint → byte offset translation (only for graphers that count characters)
//! → canonical def repos → canonical order.
//! After normalization every offset is a UTF-8 byte offset into its file, using `[start, end)`.
//! An offset of 0 means "not set" and is never translated.

mod config;
mod def;
mod doc;
mod error;
mod normalize;
mod output;
mod position_index;
mod reference;
mod render;
pub mod repo;
mod sort;
mod tests;
mod translate;

pub use config::{NormalizeConfig, TranslateConfig};
pub use def::{Def, DefKey};
pub use doc::Doc;
pub use error::{NormalizeError, TranslateError};
pub use normalize::normalize;
pub use output::Output;
pub use position_index::PositionIndex;
pub use reference::Ref;
pub use render::format_output;
pub use repo::{RepoUriError, make_uri};
pub use sort::{cmp_defs, cmp_docs, cmp_refs, is_sorted, sort};
pub use translate::{
    OffsetTranslator, TranslateFailure, TranslateReport, translate, translate_with_report,
};
