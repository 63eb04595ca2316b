// Shared fixtures for the integration tests. Not every test file uses every helper.
#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

pub const COMMIT_TIME: i64 = 1_600_000_000;
pub const COMMIT_OFFSET: i32 = 60;
pub const COMMIT_MESSAGE: &str = "fix: handle empty input\n";

/// A working repository with one commit and a bare repository wired up as its origin.
pub struct Fixture {
    pub work: TempDir,
    pub origin: TempDir,
    pub head: Oid,
}

impl Fixture {
    pub fn new(tags: &[&str]) -> Self {
        let work = TempDir::new().unwrap();
        let origin = TempDir::new().unwrap();

        let repo = Repository::init(work.path()).unwrap();
        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Test Tagger").unwrap();
            config.set_str("user.email", "tagger@example.com").unwrap();
        }

        let author = Signature::new(
            "Test Author",
            "author@example.com",
            &Time::new(COMMIT_TIME, COMMIT_OFFSET),
        )
        .unwrap();
        let head = {
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &author, &author, COMMIT_MESSAGE, &tree, &[])
                .unwrap()
        };

        {
            let object = repo.find_object(head, None).unwrap();
            for tag in tags {
                repo.tag_lightweight(tag, &object, false).unwrap();
            }
        }

        Repository::init_bare(origin.path()).unwrap();
        repo.remote("origin", origin.path().to_str().unwrap())
            .unwrap();

        Fixture { work, origin, head }
    }

    pub fn work_path(&self) -> &Path {
        self.work.path()
    }

    pub fn open_work(&self) -> Repository {
        Repository::open(self.work.path()).unwrap()
    }

    pub fn open_origin(&self) -> Repository {
        Repository::open(self.origin.path()).unwrap()
    }

    /// Point origin at a path that does not exist so every push fails
    pub fn break_origin(&self) -> PathBuf {
        let missing = self.origin.path().join("does-not-exist");
        self.open_work()
            .remote_set_url("origin", missing.to_str().unwrap())
            .unwrap();
        missing
    }
}

/// Names of all tags in `repo`, sorted
pub fn tag_names(repo: &Repository) -> Vec<String> {
    let mut names: Vec<String> = repo
        .tag_names(None)
        .unwrap()
        .iter()
        .flatten()
        .map(str::to_string)
        .collect();
    names.sort();
    names
}

/// In-memory writer whose contents stay readable after it is handed to an Output
#[derive(Clone, Default)]
pub struct Captured(Rc<RefCell<Vec<u8>>>);

impl Captured {
    pub fn text(&self) -> String {
        console::strip_ansi_codes(&String::from_utf8_lossy(&self.0.borrow())).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
