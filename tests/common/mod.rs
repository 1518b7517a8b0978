// Shared helpers for building throwaway repositories with git2
#![allow(dead_code)]

use git2::{Commit, Oid, Repository, Signature, Time};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        {
            let mut config = repo.config().expect("Could not get config");
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }
        TestRepo { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn signature(secs: i64) -> Signature<'static> {
        Signature::new("Test User", "test@example.com", &Time::new(secs, 0)).unwrap()
    }

    /// Commit an empty tree on top of HEAD, committed at `secs`
    pub fn commit(&self, message: &str, secs: i64) -> Oid {
        let parents: Vec<Commit<'_>> = match self.repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => Vec::new(),
        };
        let parent_refs: Vec<&Commit<'_>> = parents.iter().collect();
        self.commit_on("HEAD", message, secs, &parent_refs)
    }

    /// Commit with explicit parents, updating `reference`
    pub fn commit_on(&self, reference: &str, message: &str, secs: i64, parents: &[&Commit<'_>]) -> Oid {
        let sig = Self::signature(secs);
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        self.repo
            .commit(Some(reference), &sig, &sig, message, &tree, parents)
            .unwrap()
    }

    pub fn find_commit(&self, oid: Oid) -> Commit<'_> {
        self.repo.find_commit(oid).unwrap()
    }

    pub fn tag_lightweight(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }

    pub fn tag_annotated(&self, name: &str, oid: Oid, secs: i64) -> Oid {
        let object = self.repo.find_object(oid, None).unwrap();
        self.repo
            .tag(name, &object, &Self::signature(secs), &format!("Release {}", name), false)
            .unwrap()
    }

    /// Leave an untracked file in the working tree
    pub fn make_dirty(&self) {
        fs::write(self.path().join("scratch.txt"), "work in progress").unwrap();
    }

    pub fn set_remote(&self, name: &str, url: &str) {
        self.repo.remote(name, url).unwrap();
    }
}

pub fn short(oid: Oid) -> String {
    oid.to_string()[..7].to_string()
}
