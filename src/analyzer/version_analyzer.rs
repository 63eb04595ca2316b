use tracing::debug;

use crate::domain::{BumpKind, TagRecord, Version};
use crate::error::{BumpError, Result};

/// The version tags of a repository, sorted ascending. Never empty.
#[derive(Debug, Clone)]
pub struct VersionSet {
    versions: Vec<Version>,
    skipped: Vec<String>,
}

impl VersionSet {
    /// Parse raw tag names, keeping those that are versions.
    ///
    /// Names that do not parse are skipped without error; a repository may carry
    /// tags unrelated to releases. Fails with [BumpError::NoVersionsFound] when
    /// nothing parses.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut versions = Vec::new();
        let mut skipped = Vec::new();

        for name in names {
            let name = name.as_ref();
            match Version::parse(name) {
                Some(version) => versions.push(version),
                None => {
                    debug!(tag = name, "skipping tag that is not a semantic version");
                    skipped.push(name.to_string());
                }
            }
        }

        if versions.is_empty() {
            return Err(BumpError::NoVersionsFound);
        }

        // Stable sort: among equal versions the one seen last becomes current
        versions.sort();
        Ok(VersionSet { versions, skipped })
    }

    /// Parse the names of tags read from a repository
    pub fn from_tags(tags: &[TagRecord]) -> Result<Self> {
        Self::from_names(tags.iter().map(|tag| tag.name.as_str()))
    }

    /// The highest version, which the next one is computed from
    pub fn current(&self) -> &Version {
        // from_names guarantees at least one element
        &self.versions[self.versions.len() - 1]
    }

    /// All versions, lowest first
    pub fn iter(&self) -> impl Iterator<Item = &Version> {
        self.versions.iter()
    }

    /// Number of version tags
    pub fn count(&self) -> usize {
        self.versions.len()
    }

    /// Tag names that were not versions, in the order they were seen
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }
}

/// The version following `current` for the chosen bump kind
pub fn next_version(current: &Version, kind: BumpKind) -> Result<Version> {
    current.bump(kind)
}
