use std::path::PathBuf;

use thiserror::Error;

use crate::domain::BumpKind;

/// Unified error type for git-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Cannot open repository at '{}': {reason}", path.display())]
    RepositoryOpenFailed { path: PathBuf, reason: String },

    #[error("No semantic version tags found; create an initial tag such as v0.1.0 first")]
    NoVersionsFound,

    #[error("Failed to select a version bump: {0}")]
    SelectionAborted(String),

    #[error(
        "Cannot bump {kind} version of '{version}': \
         the {kind} component is already at its maximum"
    )]
    VersionOverflow { version: String, kind: BumpKind },

    #[error("Cannot resolve HEAD: {0}")]
    HeadUnavailable(String),

    #[error("Cannot determine tagger identity: {0}")]
    IdentityUnavailable(String),

    #[error("Failed to create tag '{tag}': {reason}")]
    TagCreationFailed { tag: String, reason: String },

    #[error(
        "Tag '{tag}' was created locally but pushing it to '{remote}' failed: {reason}. \
         Local and remote tags now differ"
    )]
    PushFailed {
        tag: String,
        remote: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    pub fn repository_open(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        BumpError::RepositoryOpenFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn selection_aborted(msg: impl Into<String>) -> Self {
        BumpError::SelectionAborted(msg.into())
    }

    pub fn version_overflow(version: impl Into<String>, kind: BumpKind) -> Self {
        BumpError::VersionOverflow {
            version: version.into(),
            kind,
        }
    }

    pub fn head(msg: impl Into<String>) -> Self {
        BumpError::HeadUnavailable(msg.into())
    }

    pub fn identity(msg: impl Into<String>) -> Self {
        BumpError::IdentityUnavailable(msg.into())
    }

    pub fn tag_creation(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        BumpError::TagCreationFailed {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    pub fn push(
        tag: impl Into<String>,
        remote: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BumpError::PushFailed {
            tag: tag.into(),
            remote: remote.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Name of the tag left in the local repository when the push phase failed.
    pub fn local_tag(&self) -> Option<&str> {
        match self {
            BumpError::PushFailed { tag, .. } => Some(tag),
            _ => None,
        }
    }
}
