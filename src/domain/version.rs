use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use semver::{BuildMetadata, Prerelease};

use crate::domain::{BumpKind, TAG_PREFIX};
use crate::error::{BumpError, Result};

/// Lenient tag grammar: `v?MAJOR(.MINOR)?(.PATCH)?(-PRE)?(+BUILD)?`.
/// Missing minor/patch components read as zero.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^v?([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?(?:-([0-9A-Za-z.-]+))?(?:\+([0-9A-Za-z.-]+))?$",
    )
    .expect("version pattern is a valid regex")
});

/// A semantic version read from a tag, remembering the tag text it came from.
///
/// Equality and ordering follow semver precedence: major, minor, patch, then
/// pre-release (a release outranks any of its pre-releases). Build metadata and
/// the original text are ignored when comparing.
#[derive(Debug, Clone)]
pub struct Version {
    inner: semver::Version,
    original: String,
}

impl Version {
    /// Create a clean release version whose original text is its canonical form
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        let inner = semver::Version::new(major, minor, patch);
        let original = inner.to_string();
        Version { inner, original }
    }

    /// Parse a version from a tag name (e.g. "v1.2.3", "1.2", "v2.0.0-rc.1+build.5").
    ///
    /// Returns `None` for anything that is not a version; callers skip such tags.
    pub fn parse(tag: &str) -> Option<Self> {
        let captures = VERSION_PATTERN.captures(tag)?;
        let component = |index: usize| -> Option<u64> {
            match captures.get(index) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(0),
            }
        };

        let mut inner = semver::Version::new(component(1)?, component(2)?, component(3)?);
        if let Some(pre) = captures.get(4) {
            inner.pre = Prerelease::new(pre.as_str()).ok()?;
        }
        if let Some(build) = captures.get(5) {
            inner.build = BuildMetadata::new(build.as_str()).ok()?;
        }

        Some(Version {
            inner,
            original: tag.to_string(),
        })
    }

    pub fn major(&self) -> u64 {
        self.inner.major
    }

    pub fn minor(&self) -> u64 {
        self.inner.minor
    }

    pub fn patch(&self) -> u64 {
        self.inner.patch
    }

    pub fn pre(&self) -> &str {
        self.inner.pre.as_str()
    }

    pub fn build(&self) -> &str {
        self.inner.build.as_str()
    }

    /// The tag text this version was parsed from
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Canonical `MAJOR.MINOR.PATCH[-PRE][+BUILD]` form, without any prefix
    pub fn canonical(&self) -> String {
        self.inner.to_string()
    }

    /// Whether the original tag text carries the `v` prefix
    pub fn has_prefix(&self) -> bool {
        self.original.starts_with(TAG_PREFIX)
    }

    /// Increment one component and reset the lower ones.
    ///
    /// The result is always a clean release: pre-release and build metadata are dropped.
    /// Fails with [BumpError::VersionOverflow] when the component is already `u64::MAX`.
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        let overflow = || BumpError::version_overflow(self.original(), kind);
        let (major, minor, patch) = match kind {
            BumpKind::Major => (self.major().checked_add(1).ok_or_else(overflow)?, 0, 0),
            BumpKind::Minor => (
                self.major(),
                self.minor().checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            BumpKind::Patch => (
                self.major(),
                self.minor(),
                self.patch().checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(Version::new(major, minor, patch))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // semver's Prerelease ordering already ranks the empty pre-release highest
        (self.major(), self.minor(), self.patch(), &self.inner.pre).cmp(&(
            other.major(),
            other.minor(),
            other.patch(),
            &other.inner.pre,
        ))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}
