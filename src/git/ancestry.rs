//! Commit-graph walk from a revision to every reachable ancestor

use crate::domain::{Commit, Commits};
use crate::error::Result;
use crate::git::Repository;
use std::collections::HashMap;
use tracing::{debug, instrument, trace};

/// Collect every commit reachable from `revision` through parent links.
///
/// The walk uses an explicit stack and a map of visited hashes, so each
/// commit is fetched at most once no matter how many paths reach it, and
/// history depth is bounded by heap rather than call stack. The first
/// lookup failure aborts the walk.
///
/// The result is sorted most recent first by committer time, equal times
/// ordered by hash.
#[instrument(skip(repo))]
pub fn ancestry<R: Repository + ?Sized>(repo: &R, revision: &str) -> Result<Commits> {
    let start = repo.resolve_revision(revision)?;

    let mut visited: HashMap<String, Commit> = HashMap::new();
    let mut pending = vec![start];

    while let Some(hash) = pending.pop() {
        if visited.contains_key(&hash) {
            continue;
        }

        let commit = repo.find_commit(&hash)?;
        trace!(%hash, parents = commit.parent_hashes.len(), "visiting commit");

        pending.extend(
            commit
                .parent_hashes
                .iter()
                .filter(|parent| !visited.contains_key(*parent))
                .cloned(),
        );
        visited.insert(hash, commit);
    }

    let commits = Commits::from_unsorted(visited.into_values().collect());
    debug!(count = commits.len(), "collected ancestry");
    Ok(commits)
}
