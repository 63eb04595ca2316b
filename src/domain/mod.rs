//! Domain logic - pure business rules independent of git operations

pub mod bump;
pub mod signature;
pub mod tag;
pub mod version;

pub use bump::BumpKind;
pub use signature::{Identity, Signature, TagTime};
pub use tag::{published_tag_name, tag_ref, TagRecord, TAG_PREFIX};
pub use version::Version;
