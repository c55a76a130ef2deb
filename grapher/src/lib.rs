//! Runs registered graphers over source units.
//!
//! A [`Registry`] maps a source-unit type to the grapher that handles it, together with the
//! offset units that grapher reports. [`Registry::graph`] runs the grapher, converts
//! codepoint offsets to byte offsets when needed, and sorts the result.

mod error;
mod registry;
mod unit;

pub use error::{GraphError, GrapherError};
pub use registry::{Grapher, OffsetUnits, Registry};
pub use unit::{RepoConfig, SourceUnit, unit_matches_args};
