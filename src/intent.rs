//! Turning the bump flags given on the command line into exactly one bump kind.

use crate::domain::{BumpKind, Version};
use crate::error::Result;
use crate::ui::Prompter;

/// What the flags say about the bump
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Exactly one kind was requested; no question needed
    Resolved(BumpKind),
    /// The user has to choose among these kinds, in menu order
    NeedsChoice(Vec<BumpKind>),
}

impl Intent {
    /// Classify the requested kinds.
    ///
    /// No flags offer every kind; several flags offer only those, so a conflicting
    /// request is settled by the user instead of a precedence rule.
    pub fn from_requested(requested: &[BumpKind]) -> Self {
        let mut kinds = requested.to_vec();
        kinds.sort();
        kinds.dedup();

        match kinds.as_slice() {
            [] => Intent::NeedsChoice(BumpKind::ALL.to_vec()),
            [kind] => Intent::Resolved(*kind),
            _ => Intent::NeedsChoice(kinds),
        }
    }
}

/// Label shown above the menu
pub fn prompt_label(current: &Version) -> String {
    format!("Current tag is {:?}. Next is?", current.original())
}

/// Decide the bump kind, asking through `prompter` when the flags do not settle it
pub fn resolve_bump_kind<P: Prompter + ?Sized>(
    requested: &[BumpKind],
    current: &Version,
    prompter: &P,
) -> Result<BumpKind> {
    match Intent::from_requested(requested) {
        Intent::Resolved(kind) => Ok(kind),
        Intent::NeedsChoice(choices) => prompter.select(&prompt_label(current), &choices),
    }
}
