use std::cell::Cell;
use std::io::Write;
use std::path::Path;

use git2::{Oid, Repository as Git2Repo};
use tracing::{debug, warn};

use crate::domain::{tag_ref, Signature, TagRecord, TagTime};
use crate::error::{BumpError, Result};
use crate::git::HeadCommit;
use crate::identity::Credentials;

/// How many times libgit2 may ask for credentials before the push gives up
const MAX_CREDENTIAL_ATTEMPTS: usize = 3;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository whose working tree (or git dir) is exactly `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::open(path)
            .map_err(|e| BumpError::repository_open(path, e.message()))?;

        Ok(Git2Repository { repo })
    }

    /// Layered configuration (local, global, system) of this repository
    pub fn config(&self) -> Result<git2::Config> {
        Ok(self.repo.config()?)
    }
}

fn to_git2_signature(
    signature: &Signature,
) -> std::result::Result<git2::Signature<'static>, git2::Error> {
    let time = git2::Time::new(signature.when.seconds, signature.when.offset_minutes);
    git2::Signature::new(&signature.name, &signature.email, &time)
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<TagRecord>> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::new();

        for name in names.iter().flatten() {
            let target = self
                .repo
                .find_reference(&tag_ref(name))
                .and_then(|reference| reference.peel(git2::ObjectType::Commit))
                .map(|object| object.id());

            match target {
                Ok(oid) => tags.push(TagRecord::new(name, oid)),
                Err(e) => {
                    warn!(tag = name, error = %e, "skipping tag that does not resolve to a commit")
                }
            }
        }

        debug!(count = tags.len(), "listed tags");
        Ok(tags)
    }

    fn head(&self) -> Result<HeadCommit> {
        let head = self.repo.head().map_err(|e| BumpError::head(e.message()))?;
        let reference = head.name().unwrap_or("HEAD").to_string();
        let commit = head.peel_to_commit().map_err(|e| {
            BumpError::head(format!(
                "'{}' does not point at a commit: {}",
                reference,
                e.message()
            ))
        })?;

        let committer = commit.committer();
        let when = committer.when();

        debug!(reference = %reference, oid = %commit.id(), "resolved HEAD");
        Ok(HeadCommit {
            reference,
            oid: commit.id(),
            message: commit.message().unwrap_or_default().to_string(),
            committer_time: TagTime::new(when.seconds(), when.offset_minutes()),
        })
    }

    fn create_annotated_tag(
        &self,
        name: &str,
        target: Oid,
        tagger: &Signature,
        message: &str,
    ) -> Result<Oid> {
        let object = self.repo.find_object(target, None).map_err(|e| {
            BumpError::tag_creation(
                name,
                format!("cannot find object {}: {}", target, e.message()),
            )
        })?;
        let tagger = to_git2_signature(tagger).map_err(|e| {
            BumpError::tag_creation(name, format!("invalid tagger: {}", e.message()))
        })?;

        let oid = self
            .repo
            .tag(name, &object, &tagger, message, false)
            .map_err(|e| BumpError::tag_creation(name, e.message()))?;

        debug!(tag = name, oid = %oid, "created annotated tag");
        Ok(oid)
    }

    fn push_tag(
        &self,
        remote_name: &str,
        tag_name: &str,
        credentials: &Credentials,
        progress: &mut dyn Write,
    ) -> Result<()> {
        let mut remote = self.repo.find_remote(remote_name).map_err(|e| {
            BumpError::push(
                tag_name,
                remote_name,
                format!("no remote named '{}': {}", remote_name, e.message()),
            )
        })?;

        let attempts = Cell::new(0usize);
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            attempts.set(attempts.get() + 1);
            if attempts.get() > MAX_CREDENTIAL_ATTEMPTS {
                return Err(git2::Error::from_str("credentials were rejected"));
            }

            if allowed_types.contains(git2::CredentialType::USER_PASS_PLAINTEXT) {
                if let Some(token) = credentials.token() {
                    return git2::Cred::userpass_plaintext(&credentials.username, token);
                }
            }

            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                return git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"));
            }

            git2::Cred::default()
        });

        callbacks.sideband_progress(|data| {
            // A failed progress write never fails the push
            let _ = progress.write_all(data);
            true
        });

        // The server may reject the reference even when the transport succeeds
        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => Err(git2::Error::from_str(&format!(
                "remote rejected {}: {}",
                refname, status
            ))),
            None => Ok(()),
        });

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspec = format!("{}:{}", tag_ref(tag_name), tag_ref(tag_name));
        debug!(remote = remote_name, refspec = %refspec, "pushing tag");

        remote
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| {
                let reason = match e.class() {
                    git2::ErrorClass::Net => format!("network error: {}", e.message()),
                    git2::ErrorClass::Reference => format!("reference error: {}", e.message()),
                    _ => e.message().to_string(),
                };
                BumpError::push(tag_name, remote_name, reason)
            })?;

        Ok(())
    }
}
