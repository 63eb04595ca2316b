use std::cell::RefCell;
use std::io::Write;

use git2::Oid;

use crate::domain::{Signature, TagRecord};
use crate::error::{BumpError, Result};
use crate::git::{HeadCommit, Repository};
use crate::identity::Credentials;

/// An annotated tag created through [MockRepository]
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedTag {
    pub name: String,
    pub target: Oid,
    pub tagger: Signature,
    pub message: String,
}

/// A push performed through [MockRepository]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushedTag {
    pub remote: String,
    pub tag: String,
    pub username: String,
    pub token: Option<String>,
}

/// Mock repository for testing without actual git operations.
///
/// Tags created through the trait show up in later `list_tags` calls, like they
/// would in a real repository.
#[derive(Default)]
pub struct MockRepository {
    tags: RefCell<Vec<TagRecord>>,
    head: Option<HeadCommit>,
    created: RefCell<Vec<CreatedTag>>,
    pushed: RefCell<Vec<PushedTag>>,
    push_error: Option<String>,
    remote_progress: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.get_mut().push(TagRecord::new(name, oid));
    }

    /// Set the commit HEAD resolves to
    pub fn set_head(&mut self, head: HeadCommit) {
        self.head = Some(head);
    }

    /// Make every push fail with `reason`
    pub fn fail_push(&mut self, reason: impl Into<String>) {
        self.push_error = Some(reason.into());
    }

    /// Sideband text the fake remote sends back during a push
    pub fn set_remote_progress(&mut self, text: impl Into<String>) {
        self.remote_progress = Some(text.into());
    }

    /// Tags created so far, oldest first
    pub fn created_tags(&self) -> Vec<CreatedTag> {
        self.created.borrow().clone()
    }

    /// Successful pushes so far, oldest first
    pub fn pushed_tags(&self) -> Vec<PushedTag> {
        self.pushed.borrow().clone()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<TagRecord>> {
        Ok(self.tags.borrow().clone())
    }

    fn head(&self) -> Result<HeadCommit> {
        self.head
            .clone()
            .ok_or_else(|| BumpError::head("reference 'refs/heads/main' not found"))
    }

    fn create_annotated_tag(
        &self,
        name: &str,
        target: Oid,
        tagger: &Signature,
        message: &str,
    ) -> Result<Oid> {
        if self.tags.borrow().iter().any(|tag| tag.name == name) {
            return Err(BumpError::tag_creation(name, "tag already exists"));
        }

        self.tags.borrow_mut().push(TagRecord::new(name, target));
        self.created.borrow_mut().push(CreatedTag {
            name: name.to_string(),
            target,
            tagger: tagger.clone(),
            message: message.to_string(),
        });

        let count = self.created.borrow().len() as u8;
        Ok(Oid::from_bytes(&[count; 20])?)
    }

    fn push_tag(
        &self,
        remote: &str,
        tag_name: &str,
        credentials: &Credentials,
        progress: &mut dyn Write,
    ) -> Result<()> {
        if let Some(text) = &self.remote_progress {
            progress.write_all(text.as_bytes())?;
        }

        if let Some(reason) = &self.push_error {
            return Err(BumpError::push(tag_name, remote, reason.clone()));
        }

        if !self.tags.borrow().iter().any(|tag| tag.name == tag_name) {
            return Err(BumpError::push(
                tag_name,
                remote,
                format!("src refspec {} does not match any", tag_name),
            ));
        }

        self.pushed.borrow_mut().push(PushedTag {
            remote: remote.to_string(),
            tag: tag_name.to_string(),
            username: credentials.username.clone(),
            token: credentials.token().map(str::to_string),
        });
        Ok(())
    }
}
