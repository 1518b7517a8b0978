use crate::domain::{Commit, Head, Signature};
use crate::error::{GitSemverError, Result};
use crate::git::{AnnotatedTag, Repository, TagReference};
use std::cell::Cell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    commits: HashMap<String, Commit>,
    annotated_tags: HashMap<String, AnnotatedTag>,
    tag_refs: Vec<TagReference>,
    revisions: HashMap<String, String>,
    head: Option<Head>,
    clean: bool,
    remotes: HashMap<String, String>,
    commit_lookups: Cell<usize>,
}

impl MockRepository {
    /// Create a new empty mock repository with a clean working tree
    pub fn new() -> Self {
        MockRepository {
            commits: HashMap::new(),
            annotated_tags: HashMap::new(),
            tag_refs: Vec::new(),
            revisions: HashMap::new(),
            head: None,
            clean: true,
            remotes: HashMap::new(),
            commit_lookups: Cell::new(0),
        }
    }

    /// Add a commit to the mock object store
    pub fn add_commit(&mut self, commit: Commit) {
        self.commits.insert(commit.hash.clone(), commit);
    }

    /// Add a lightweight tag pointing at a commit hash
    pub fn add_lightweight_tag(&mut self, name: impl Into<String>, commit_hash: impl Into<String>) {
        self.tag_refs.push(TagReference {
            name: name.into(),
            target: commit_hash.into(),
        });
    }

    /// Add an annotated tag object and a reference to it
    pub fn add_annotated_tag(
        &mut self,
        name: impl Into<String>,
        tag_hash: impl Into<String>,
        tagger: Signature,
        message: impl Into<String>,
        commit_hash: impl Into<String>,
    ) {
        let tag_hash = tag_hash.into();
        self.annotated_tags.insert(
            tag_hash.clone(),
            AnnotatedTag {
                hash: tag_hash.clone(),
                tagger,
                message: message.into(),
                target: commit_hash.into(),
            },
        );
        self.tag_refs.push(TagReference {
            name: name.into(),
            target: tag_hash,
        });
    }

    /// Make `revision` resolve to `hash`
    pub fn set_revision(&mut self, revision: impl Into<String>, hash: impl Into<String>) {
        self.revisions.insert(revision.into(), hash.into());
    }

    /// Check out `hash` on `branch`; also makes "HEAD" and the branch name resolve
    pub fn set_head(&mut self, hash: impl Into<String>, branch: Option<&str>) {
        let hash = hash.into();
        self.set_revision("HEAD", hash.clone());
        self.head = Some(match branch {
            Some(name) => {
                self.set_revision(name, hash.clone());
                Head::on_branch(hash, name)
            }
            None => Head::detached(hash),
        });
    }

    pub fn set_clean(&mut self, clean: bool) {
        self.clean = clean;
    }

    pub fn add_remote(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.remotes.insert(name.into(), url.into());
    }

    /// Number of `find_commit` calls so far
    pub fn commit_lookups(&self) -> usize {
        self.commit_lookups.get()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn resolve_revision(&self, revision: &str) -> Result<String> {
        if let Some(hash) = self.revisions.get(revision) {
            return Ok(hash.clone());
        }
        if self.commits.contains_key(revision) {
            return Ok(revision.to_string());
        }
        Err(GitSemverError::revision_not_found(revision))
    }

    fn find_commit(&self, hash: &str) -> Result<Commit> {
        self.commit_lookups.set(self.commit_lookups.get() + 1);
        self.commits
            .get(hash)
            .cloned()
            .ok_or_else(|| GitSemverError::object_not_found(hash))
    }

    fn tag_references(&self) -> Result<Vec<TagReference>> {
        Ok(self.tag_refs.clone())
    }

    fn find_annotated_tag(&self, hash: &str) -> Result<Option<AnnotatedTag>> {
        if let Some(tag) = self.annotated_tags.get(hash) {
            return Ok(Some(tag.clone()));
        }
        if self.commits.contains_key(hash) {
            return Ok(None);
        }
        Err(GitSemverError::object_not_found(hash))
    }

    fn is_clean(&self) -> Result<bool> {
        Ok(self.clean)
    }

    fn head(&self) -> Result<Head> {
        self.head
            .clone()
            .ok_or_else(|| GitSemverError::revision_not_found("HEAD"))
    }

    fn remote_url(&self, name: &str) -> Result<Option<String>> {
        Ok(self.remotes.get(name).cloned())
    }
}
