//! Git access abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries git-semver needs, plus the two derived operations built on top
//! of it: the ancestry walk and the tag catalog.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. Implementations:
//!
//! - [repository::Git2Repository]: a real repository opened with the `git2` crate
//! - [mock::MockRepository]: an in-memory object store for tests
//!
//! # Usage
//!
//! ```rust
//! # use git_semver::git::{ancestry, list_tags, Repository};
//! # fn example<R: Repository>(repo: &R) -> git_semver::Result<()> {
//! let commits = ancestry(repo, "HEAD")?;
//! let tags = list_tags(repo)?;
//! println!("{} commits, {} tags", commits.len(), tags.len());
//! # Ok(())
//! # }
//! ```

pub mod ancestry;
pub mod catalog;
pub mod mock;
pub mod repository;

pub use ancestry::ancestry;
pub use catalog::list_tags;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{Commit, Head, Signature};
use crate::error::Result;

/// A reference under `refs/tags/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagReference {
    /// Short tag name (e.g., "v1.0.0")
    pub name: String,
    /// Hash the reference points at: a tag object or a commit
    pub target: String,
}

/// An annotated tag object as stored in the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedTag {
    pub hash: String,
    pub tagger: Signature,
    pub message: String,
    /// Hash of the object the tag annotates
    pub target: String,
}

/// Read-only repository queries.
///
/// ## Error Handling
///
/// Implementations map lookup failures onto the error taxonomy:
/// [crate::error::GitSemverError::RevisionNotFound] for revisions that do
/// not resolve, [crate::error::GitSemverError::ObjectNotFound] for missing
/// objects, and [crate::error::GitSemverError::Repository] for anything
/// else the backend reports.
pub trait Repository {
    /// Resolve a revision ("HEAD", a branch, a tag, a hash) to a commit hash
    fn resolve_revision(&self, revision: &str) -> Result<String>;

    /// Load the commit with the given full hash
    fn find_commit(&self, hash: &str) -> Result<Commit>;

    /// List every tag reference
    fn tag_references(&self) -> Result<Vec<TagReference>>;

    /// Load the annotated tag object with the given hash.
    ///
    /// Returns `Ok(None)` when the object exists but is not a tag object,
    /// which is the case for lightweight tags pointing straight at a commit.
    fn find_annotated_tag(&self, hash: &str) -> Result<Option<AnnotatedTag>>;

    /// Whether the working tree has no staged, unstaged or untracked changes
    fn is_clean(&self) -> Result<bool>;

    /// The checked-out commit and branch
    fn head(&self) -> Result<Head>;

    /// URL of the named remote, if configured
    fn remote_url(&self, name: &str) -> Result<Option<String>>;
}
