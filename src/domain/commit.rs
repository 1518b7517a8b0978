use crate::domain::Signature;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

const ONE_LINE_LIMIT: usize = 100;

/// A commit as read from the repository.
///
/// Identity is the hash: two commits are equal iff their hashes match,
/// whatever the other fields hold.
#[derive(Debug, Clone)]
pub struct Commit {
    pub hash: String,
    pub author: Signature,
    pub committer: Signature,
    pub message: String,
    pub parent_hashes: Vec<String>,
}

impl Commit {
    /// Abbreviated hash, at most `len` characters
    pub fn short_hash(&self, len: usize) -> &str {
        abbreviate(&self.hash, len)
    }

    /// Whether this commit was committed strictly before `other`
    pub fn before(&self, other: &Commit) -> bool {
        self.committer.before(&other.committer)
    }

    /// Whether this commit was committed strictly after `other`
    pub fn after(&self, other: &Commit) -> bool {
        self.committer.after(&other.committer)
    }

    /// Most-recent-first ordering: later committer time sorts first, equal
    /// times fall back to the hash so the order is total.
    pub fn cmp_recent_first(&self, other: &Commit) -> Ordering {
        other
            .committer
            .when
            .cmp(&self.committer.when)
            .then_with(|| self.hash.cmp(&other.hash))
    }

    /// First line of the message, truncated to 100 characters
    pub fn one_line(&self) -> String {
        let first = self.message.lines().next().unwrap_or("").trim_end();
        if first.chars().count() > ONE_LINE_LIMIT {
            let truncated: String = first.chars().take(ONE_LINE_LIMIT).collect();
            format!("{} ...", truncated)
        } else {
            first.to_string()
        }
    }
}

impl PartialEq for Commit {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Commit {}

impl Hash for Commit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "commit {}", self.hash)?;
        writeln!(f, "Author:    {}", self.author)?;
        writeln!(f, "Committer: {}", self.committer)?;
        writeln!(f)?;
        for line in self.message.trim_end().lines() {
            writeln!(f, "    {}", line)?;
        }
        Ok(())
    }
}

/// Commits ordered most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commits(Vec<Commit>);

impl Commits {
    /// Build a sequence from commits in any order, sorting most recent first
    pub fn from_unsorted(mut commits: Vec<Commit>) -> Self {
        commits.sort_by(Commit::cmp_recent_first);
        Commits(commits)
    }

    /// The most recent commit, standing in for the current head position
    pub fn head(&self) -> Option<&Commit> {
        self.0.first()
    }

    /// Index of `commit` in the sequence, compared by hash
    pub fn position(&self, commit: &Commit) -> Option<usize> {
        self.0.iter().position(|c| c == commit)
    }

    pub fn into_inner(self) -> Vec<Commit> {
        self.0
    }
}

impl Deref for Commits {
    type Target = [Commit];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Commits {
    type Item = Commit;
    type IntoIter = std::vec::IntoIter<Commit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Commits {
    type Item = &'a Commit;
    type IntoIter = std::slice::Iter<'a, Commit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Cut a hash down to `len` characters (hashes are ASCII hex)
pub(crate) fn abbreviate(hash: &str, len: usize) -> &str {
    match hash.char_indices().nth(len) {
        Some((idx, _)) => &hash[..idx],
        None => hash,
    }
}
