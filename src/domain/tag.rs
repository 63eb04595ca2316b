use git2::Oid;

use crate::domain::Version;

/// Prefix carried over from the current tag to the new one
pub const TAG_PREFIX: &str = "v";

/// A tag as found in the repository: its short name and the commit it names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub name: String,
    pub target: Oid,
}

impl TagRecord {
    pub fn new(name: impl Into<String>, target: Oid) -> Self {
        TagRecord {
            name: name.into(),
            target,
        }
    }
}

/// Full reference name for a tag (e.g. "v1.2.3" -> "refs/tags/v1.2.3")
pub fn tag_ref(name: &str) -> String {
    format!("refs/tags/{}", name)
}

/// Name of the tag to publish for `next`, following the convention of `current`.
///
/// The `v` prefix is kept only when the current tag already uses it.
pub fn published_tag_name(current: &Version, next: &Version) -> String {
    if current.has_prefix() {
        format!("{}{}", TAG_PREFIX, next.canonical())
    } else {
        next.canonical()
    }
}
