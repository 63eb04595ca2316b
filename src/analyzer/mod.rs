//! Reading the version history out of tag names and computing what comes next

pub mod version_analyzer;

pub use version_analyzer::{next_version, VersionSet};
