//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the handful of git
//! operations git-bump needs, allowing the bump workflow to run against a real
//! repository or an in-memory one in tests.
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! ```rust
//! # use git_bump::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_bump::Result<()> {
//! let head = repo.head()?;
//! for tag in repo.list_tags()? {
//!     println!("{} -> {}", tag.name, tag.target);
//! }
//! println!("HEAD is {} ({})", head.oid, head.reference);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::io::Write;

use git2::Oid;

use crate::domain::{Signature, TagRecord, TagTime};
use crate::error::Result;
use crate::identity::Credentials;

/// The commit HEAD currently points at
#[derive(Debug, Clone, PartialEq)]
pub struct HeadCommit {
    /// Name of the reference HEAD resolves through (e.g. "refs/heads/main", or "HEAD" when detached)
    pub reference: String,
    pub oid: Oid,
    /// Full commit message, reused as the tag annotation
    pub message: String,
    pub committer_time: TagTime,
}

/// Repository capabilities the bump workflow depends on.
///
/// Implementations should report failures with the variant naming the phase that
/// failed, so the user can tell how far a run got:
///
/// | method                   | failure variant                            |
/// |--------------------------|--------------------------------------------|
/// | `head`                   | [crate::BumpError::HeadUnavailable]         |
/// | `create_annotated_tag`   | [crate::BumpError::TagCreationFailed]       |
/// | `push_tag`               | [crate::BumpError::PushFailed]              |
pub trait Repository {
    /// All tags in the repository with the commit each one names.
    ///
    /// Tags whose reference cannot be resolved are left out.
    fn list_tags(&self) -> Result<Vec<TagRecord>>;

    /// Resolve HEAD to its commit
    fn head(&self) -> Result<HeadCommit>;

    /// Create an annotated tag `name` on `target`.
    ///
    /// Fails if a tag with that name already exists. Returns the id of the new tag object.
    fn create_annotated_tag(
        &self,
        name: &str,
        target: Oid,
        tagger: &Signature,
        message: &str,
    ) -> Result<Oid>;

    /// Push the single reference `refs/tags/<tag_name>` to `remote`.
    ///
    /// Remote progress messages are written to `progress` as they arrive.
    fn push_tag(
        &self,
        remote: &str,
        tag_name: &str,
        credentials: &Credentials,
        progress: &mut dyn Write,
    ) -> Result<()>;
}
