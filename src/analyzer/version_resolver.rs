use crate::boundary::BoundaryWarning;
use crate::config::ResolveConfig;
use crate::domain::commit::abbreviate;
use crate::domain::{Commits, Tag, Tags, Version};
use crate::error::{GitSemverError, Result};
use crate::git::{ancestry, list_tags, Repository};
use tracing::{debug, info, instrument};

/// Outcome of a version resolution
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The resolved version
    pub version: Version,
    /// Full hash of the commit the version describes
    pub commit: String,
    /// Most recent reachable tag with a version name, if any
    pub anchor: Option<Tag>,
    /// Commits between the anchor (or the root, when untagged) and head.
    /// `None` when the version is exactly the anchor's.
    pub ordinal: Option<usize>,
    /// Build signature: abbreviated head hash when clean, dirty marker otherwise
    pub signature: String,
    pub warnings: Vec<BoundaryWarning>,
}

impl Resolution {
    /// Whether the version is a released tag rather than a pre-release build
    pub fn is_exact(&self) -> bool {
        self.ordinal.is_none()
    }
}

/// Maps tags, history and working-tree state to a version
#[derive(Debug, Clone)]
pub struct VersionResolver {
    revision: String,
    initial_version: Version,
    dirty_signature: String,
    short_hash_length: usize,
}

impl VersionResolver {
    /// Create a resolver from validated settings
    pub fn new(config: &ResolveConfig) -> Result<Self> {
        config.validate()?;
        Ok(VersionResolver {
            revision: config.revision.clone(),
            initial_version: config.initial_version()?,
            dirty_signature: config.dirty_signature.clone(),
            short_hash_length: config.short_hash_length,
        })
    }

    /// Resolve the version of the working tree in `repo`.
    ///
    /// The build signature always reflects the checked-out working tree,
    /// even when a revision other than `HEAD` is resolved. Any repository
    /// failure aborts resolution; nothing is retried.
    #[instrument(skip(self, repo), fields(revision = %self.revision))]
    pub fn resolve<R: Repository + ?Sized>(&self, repo: &R) -> Result<Resolution> {
        let tags = list_tags(repo)?;
        let commits = ancestry(repo, &self.revision)?;
        let is_clean = repo.is_clean()?;

        let head_hash = if self.revision == "HEAD" {
            let head = repo.head()?;
            debug!(branch = head.display_name(), "resolving checked-out head");
            head.hash
        } else {
            repo.resolve_revision(&self.revision)?
        };

        let resolution = self.resolve_version(&tags, &commits, is_clean, &head_hash)?;
        info!(version = %resolution.version, "resolved version");
        Ok(resolution)
    }

    /// Compute the version from already-collected inputs.
    ///
    /// `tags` and `commits` must be ordered most recent first; the first
    /// commit stands for the head position.
    ///
    /// The anchor is the first tag whose commit is not newer than head and
    /// whose name parses as a version. With no anchor the result is the
    /// initial version with pre-release `[commit count, signature]`. With an
    /// anchor on a clean head the result is the anchor's own version;
    /// otherwise it is the anchor's next version with pre-release
    /// `[commits ahead of anchor, signature]`.
    pub fn resolve_version(
        &self,
        tags: &Tags,
        commits: &Commits,
        is_clean: bool,
        head_hash: &str,
    ) -> Result<Resolution> {
        let head = commits.head().ok_or(GitSemverError::EmptyHistory)?;

        let mut warnings = Vec::new();
        let signature = if is_clean {
            abbreviate(head_hash, self.short_hash_length).to_string()
        } else {
            warnings.push(BoundaryWarning::DirtyWorkingTree);
            self.dirty_signature.clone()
        };

        let anchor = tags.first(|tag| {
            if tag.commit.after(head) {
                warnings.push(BoundaryWarning::TagAheadOfHead {
                    tag: tag.name.clone(),
                    commit_hash: tag.commit.hash.clone(),
                });
                return false;
            }
            match tag.version() {
                Ok(_) => true,
                Err(e) => {
                    warnings.push(BoundaryWarning::UnparsableTag {
                        tag: tag.name.clone(),
                        reason: e.to_string(),
                    });
                    false
                }
            }
        });

        let Some(anchor) = anchor else {
            let count = commits.len();
            debug!(count, %signature, "no anchor tag");
            return Ok(Resolution {
                version: self
                    .initial_version
                    .clone()
                    .with_prerelease([count.to_string(), signature.clone()]),
                commit: head_hash.to_string(),
                anchor: None,
                ordinal: Some(count),
                signature,
                warnings,
            });
        };

        let base = anchor.version()?;
        let count = match commits.position(&anchor.commit) {
            Some(index) => index,
            None => {
                warnings.push(BoundaryWarning::AnchorNotInHistory {
                    tag: anchor.name.clone(),
                    commit_hash: anchor.commit.hash.clone(),
                });
                commits.len()
            }
        };
        debug!(anchor = %anchor.name, count, is_clean, "selected anchor tag");

        let (version, ordinal) = if count > 0 || !is_clean {
            let next = base.next()?.with_prerelease([count.to_string(), signature.clone()]);
            (next, Some(count))
        } else {
            (base, None)
        };

        Ok(Resolution {
            version,
            commit: head_hash.to_string(),
            anchor: Some(anchor.clone()),
            ordinal,
            signature,
            warnings,
        })
    }
}

impl Default for VersionResolver {
    fn default() -> Self {
        VersionResolver {
            revision: "HEAD".to_string(),
            initial_version: Version::new(0, 1, 0),
            dirty_signature: "dev".to_string(),
            short_hash_length: 7,
        }
    }
}

/// Resolve the version of `repo` with default settings
pub fn resolve<R: Repository + ?Sized>(repo: &R) -> Result<Version> {
    Ok(VersionResolver::default().resolve(repo)?.version)
}

/// Compute a version from collected inputs with default settings
pub fn resolve_version(tags: &Tags, commits: &Commits, is_clean: bool, head_hash: &str) -> Result<Version> {
    Ok(VersionResolver::default()
        .resolve_version(tags, commits, is_clean, head_hash)?
        .version)
}
