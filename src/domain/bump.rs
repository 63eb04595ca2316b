use std::fmt;

/// Which version component a bump increments.
///
/// Variants are declared from least to most disruptive; the derived ordering is the
/// order in which choices are offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BumpKind {
    Patch,
    Minor,
    Major,
}

impl BumpKind {
    /// Every bump kind in menu order
    pub const ALL: [BumpKind; 3] = [BumpKind::Patch, BumpKind::Minor, BumpKind::Major];

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Patch => "patch",
            BumpKind::Minor => "minor",
            BumpKind::Major => "major",
        }
    }

    /// Collect the kinds selected by the `--major`/`--minor`/`--patch` flags, in menu order
    pub fn from_flags(major: bool, minor: bool, patch: bool) -> Vec<BumpKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| match kind {
                BumpKind::Patch => patch,
                BumpKind::Minor => minor,
                BumpKind::Major => major,
            })
            .collect()
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
