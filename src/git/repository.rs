use crate::domain::{Commit, Head, Signature};
use crate::error::{GitSemverError, Result};
use crate::git::{AnnotatedTag, TagReference};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use git2::{ErrorCode, ObjectType, Oid, Repository as Git2Repo, StatusOptions};
use std::path::Path;
use tracing::{debug, instrument, trace};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        debug!(path = %repo.path().display(), "opened repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn parse_oid(&self, hash: &str) -> Result<Oid> {
        Oid::from_str(hash).map_err(|_| GitSemverError::object_not_found(hash))
    }
}

impl super::Repository for Git2Repository {
    #[instrument(skip(self))]
    fn resolve_revision(&self, revision: &str) -> Result<String> {
        let object = self.repo.revparse_single(revision).map_err(|e| match e.code() {
            ErrorCode::NotFound | ErrorCode::InvalidSpec | ErrorCode::Ambiguous | ErrorCode::UnbornBranch => {
                GitSemverError::revision_not_found(revision)
            }
            _ => GitSemverError::Repository(e),
        })?;

        let commit = object.peel_to_commit().map_err(|e| match e.code() {
            ErrorCode::NotFound | ErrorCode::InvalidSpec | ErrorCode::Peel => {
                GitSemverError::revision_not_found(revision)
            }
            _ => GitSemverError::Repository(e),
        })?;

        let hash = commit.id().to_string();
        debug!(%hash, "resolved revision");
        Ok(hash)
    }

    fn find_commit(&self, hash: &str) -> Result<Commit> {
        let oid = self.parse_oid(hash)?;
        let commit = self.repo.find_commit(oid).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitSemverError::object_not_found(hash),
            _ => GitSemverError::Repository(e),
        })?;
        trace!(%hash, parents = commit.parent_count(), "loaded commit");

        let author = convert_signature(&commit.author())?;
        let committer = convert_signature(&commit.committer())?;

        Ok(Commit {
            hash: commit.id().to_string(),
            author,
            committer,
            message: commit.message().unwrap_or("").to_string(),
            parent_hashes: commit.parent_ids().map(|oid| oid.to_string()).collect(),
        })
    }

    fn tag_references(&self) -> Result<Vec<TagReference>> {
        let mut tags = Vec::new();

        for reference in self.repo.references_glob("refs/tags/*")? {
            let reference = reference?;
            let Some(full_name) = reference.name() else {
                debug!("skipping tag reference with non UTF-8 name");
                continue;
            };
            let name = full_name.trim_start_matches("refs/tags/").to_string();

            let reference = reference.resolve()?;
            let target = reference
                .target()
                .ok_or_else(|| GitSemverError::object_not_found(full_name))?;

            tags.push(TagReference {
                name,
                target: target.to_string(),
            });
        }

        Ok(tags)
    }

    fn find_annotated_tag(&self, hash: &str) -> Result<Option<AnnotatedTag>> {
        let oid = self.parse_oid(hash)?;
        let object = self.repo.find_object(oid, None).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitSemverError::object_not_found(hash),
            _ => GitSemverError::Repository(e),
        })?;

        if object.kind() != Some(ObjectType::Tag) {
            return Ok(None);
        }

        let tag = object
            .into_tag()
            .map_err(|_| GitSemverError::object_not_found(hash))?;

        let tagger = match tag.tagger() {
            Some(sig) => convert_signature(&sig)?,
            // Tag objects created by very old tooling may lack a tagger
            None => Signature::new("", "", epoch()),
        };

        Ok(Some(AnnotatedTag {
            hash: tag.id().to_string(),
            tagger,
            message: tag.message().unwrap_or("").to_string(),
            target: tag.target_id().to_string(),
        }))
    }

    #[instrument(skip(self))]
    fn is_clean(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut options))?;
        let clean = statuses.is_empty();
        debug!(clean, changes = statuses.len(), "working tree status");
        Ok(clean)
    }

    #[instrument(skip(self))]
    fn head(&self) -> Result<Head> {
        let head = self.repo.head().map_err(|e| match e.code() {
            ErrorCode::UnbornBranch | ErrorCode::NotFound => GitSemverError::revision_not_found("HEAD"),
            _ => GitSemverError::Repository(e),
        })?;

        let hash = head.peel_to_commit()?.id().to_string();

        let head = if self.repo.head_detached()? {
            Head::detached(hash)
        } else {
            match head.shorthand() {
                Some(branch) => Head::on_branch(hash, branch),
                None => Head::detached(hash),
            }
        };
        debug!(hash = %head.hash, branch = head.display_name(), "current head");
        Ok(head)
    }

    fn remote_url(&self, name: &str) -> Result<Option<String>> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(str::to_string)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(GitSemverError::Repository(e)),
        }
    }
}

/// Out-of-range times mean a corrupt object and surface as repository errors
fn convert_signature(sig: &git2::Signature<'_>) -> Result<Signature> {
    let when = sig.when();
    let offset = FixedOffset::east_opt(when.offset_minutes() * 60).ok_or_else(|| {
        corrupt_object(format!("Invalid timezone offset: {} minutes", when.offset_minutes()))
    })?;
    let timestamp = offset
        .timestamp_opt(when.seconds(), 0)
        .single()
        .ok_or_else(|| corrupt_object(format!("Invalid timestamp: {}", when.seconds())))?;

    Ok(Signature::new(
        sig.name().unwrap_or("unknown"),
        sig.email().unwrap_or(""),
        timestamp,
    ))
}

fn corrupt_object(msg: String) -> GitSemverError {
    GitSemverError::Repository(git2::Error::from_str(&msg))
}

fn epoch() -> DateTime<FixedOffset> {
    DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
}
