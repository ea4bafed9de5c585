//! Builds directory skeletons from box-drawing tree notation and draws
//! existing directories back in the same notation.
//!
//! The notation itself lives in the [`treeline`] crate; this crate adds the
//! filesystem side, the structure file kept next to a project, and the
//! command-line front end.
pub mod api;
pub mod builder;
pub mod config;
pub mod errors;
pub mod preview;
pub mod prompt;
pub mod serializer;
pub mod structure;
pub mod vfs;

pub use api::{analyze, build, seed_and_build, serialize, AnalyzeOptions, BuildOptions, TreeseedError};
pub use treeline::DEFAULT_TEMPLATE;
