//! Creating the new tag at HEAD and pushing it.
//!
//! Every phase reports its own failure variant. Once the tag exists locally a
//! failed push is not rolled back: the error says so, and the user decides
//! whether to retry the push or delete the tag.

use std::io;

use git2::Oid;
use tracing::{debug, warn};

use crate::boundary::BoundaryWarning;
use crate::config::RemoteConfig;
use crate::domain::{published_tag_name, Signature, Version};
use crate::error::{BumpError, Result};
use crate::git::Repository;
use crate::identity::{token_from_env, Credentials, IdentityProvider};
use crate::ui::{display_boundary_warning, display_pushed, display_tag_created, Output};

/// Where the tag goes and what to authenticate with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushSettings {
    pub remote: String,
    /// Environment variable the token was read from, named in warnings
    pub token_variable: String,
    pub token: Option<String>,
}

impl PushSettings {
    /// Read the token named by the remote configuration from the environment
    pub fn from_config(config: &RemoteConfig) -> Self {
        PushSettings {
            remote: config.name.clone(),
            token_variable: config.token_env.clone(),
            token: token_from_env(&config.token_env),
        }
    }
}

/// A tag that was created and pushed
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub tag: String,
    /// Id of the annotated tag object
    pub tag_oid: Oid,
    /// Commit the tag names
    pub target: Oid,
    pub remote: String,
}

pub struct TagPublisher<'a, R: ?Sized, I: ?Sized> {
    repo: &'a R,
    identity: &'a I,
    settings: PushSettings,
}

impl<'a, R, I> TagPublisher<'a, R, I>
where
    R: Repository + ?Sized,
    I: IdentityProvider + ?Sized,
{
    pub fn new(repo: &'a R, identity: &'a I, settings: PushSettings) -> Self {
        TagPublisher {
            repo,
            identity,
            settings,
        }
    }

    /// Tag HEAD as `next` and push the tag.
    ///
    /// 1. resolve HEAD ([BumpError::HeadUnavailable])
    /// 2. sign as the configured identity at HEAD's committer time, with HEAD's
    ///    message as annotation ([BumpError::IdentityUnavailable])
    /// 3. name the tag after `next`, with `current`'s `v` prefix if it has one
    /// 4. create the annotated tag ([BumpError::TagCreationFailed], nothing pushed)
    /// 5. push that one tag ([BumpError::PushFailed], the local tag stays)
    pub fn publish(
        &self,
        current: &Version,
        next: &Version,
        output: &mut Output,
    ) -> Result<PublishResult> {
        let head = self.repo.head().map_err(|e| match e {
            BumpError::HeadUnavailable(_) => e,
            other => BumpError::head(other.to_string()),
        })?;

        let identity = self.identity.identity().map_err(|e| match e {
            BumpError::IdentityUnavailable(_) => e,
            other => BumpError::identity(other.to_string()),
        })?;
        let tagger = Signature::new(&identity, head.committer_time);

        let tag = published_tag_name(current, next);
        debug!(tag = %tag, target = %head.oid, "publishing");

        let tag_oid = self
            .repo
            .create_annotated_tag(&tag, head.oid, &tagger, &head.message)
            .map_err(|e| match e {
                BumpError::TagCreationFailed { .. } => e,
                other => BumpError::tag_creation(&tag, other.to_string()),
            })?;
        // From here on the tag exists: output failures are logged, never returned
        best_effort(display_tag_created(output, &tag));

        if self.settings.token.is_none() {
            let warning = BoundaryWarning::MissingPushToken {
                variable: self.settings.token_variable.clone(),
            };
            best_effort(display_boundary_warning(output, &warning));
        }

        let credentials = Credentials::new(identity.name, self.settings.token.clone());
        let remote = &self.settings.remote;
        if let Err(e) = self
            .repo
            .push_tag(remote, &tag, &credentials, output.out())
        {
            let warning = BoundaryWarning::LocalTagNotPushed {
                tag: tag.clone(),
                remote: remote.clone(),
            };
            best_effort(display_boundary_warning(output, &warning));

            return Err(match e {
                BumpError::PushFailed { .. } => e,
                other => BumpError::push(&tag, remote, other.to_string()),
            });
        }
        best_effort(display_pushed(output, remote));

        Ok(PublishResult {
            tag,
            tag_oid,
            target: head.oid,
            remote: remote.clone(),
        })
    }
}

fn best_effort(written: io::Result<()>) {
    if let Err(e) = written {
        warn!(error = %e, "cannot write to output");
    }
}
