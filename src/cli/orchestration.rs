//! Main workflow orchestration logic
//!
//! Wires the version parser, intent selection and tag publisher together. Every
//! collaborator is passed in, so the whole run can be exercised against a
//! [crate::git::MockRepository] and a [crate::ui::ScriptedPrompter].

use tracing::debug;

use crate::analyzer::{next_version, VersionSet};
use crate::domain::{BumpKind, Version};
use crate::error::Result;
use crate::git::Repository;
use crate::identity::IdentityProvider;
use crate::intent::resolve_bump_kind;
use crate::publisher::{PublishResult, PushSettings, TagPublisher};
use crate::ui::{display_versions, Output, Prompter};

/// Arguments for the bump workflow
///
/// Mirrors the CLI flags in a form that does not depend on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Kinds selected by `--major`/`--minor`/`--patch`; empty means ask
    pub requested: Vec<BumpKind>,

    pub push: PushSettings,
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub current: Version,
    pub kind: BumpKind,
    pub next: Version,
    pub publish: PublishResult,
}

/// Main bump workflow
///
/// 1. Read the version tags and list them
/// 2. Decide the bump kind (prompting when the flags do not settle it)
/// 3. Compute the next version
/// 4. Create the tag at HEAD and push it
///
/// Nothing is prompted for or pushed when the repository has no version tag.
pub fn run_bump_workflow<R, I, P>(
    repo: &R,
    identity: &I,
    prompter: &P,
    args: &BumpWorkflowArgs,
    output: &mut Output,
) -> Result<WorkflowResult>
where
    R: Repository + ?Sized,
    I: IdentityProvider + ?Sized,
    P: Prompter + ?Sized,
{
    let tags = repo.list_tags()?;
    let versions = VersionSet::from_tags(&tags)?;
    debug!(
        versions = versions.count(),
        skipped = versions.skipped().len(),
        "parsed tags"
    );
    display_versions(output, &versions)?;

    let current = versions.current();
    let kind = resolve_bump_kind(&args.requested, current, prompter)?;
    let next = next_version(current, kind)?;
    debug!(current = %current, next = %next, kind = %kind, "resolved next version");

    let publisher = TagPublisher::new(repo, identity, args.push.clone());
    let publish = publisher.publish(current, &next, output)?;

    Ok(WorkflowResult {
        current: current.clone(),
        kind,
        next,
        publish,
    })
}
