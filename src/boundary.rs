use crate::domain::commit::abbreviate;
use std::fmt;

/// Non-fatal observations made while resolving a version.
/// These never change the result; they explain it.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag exists but cannot be parsed as a semantic version
    UnparsableTag { tag: String, reason: String },
    /// Tag points at a commit newer than the current head
    TagAheadOfHead { tag: String, commit_hash: String },
    /// Anchor tag's commit is older than head but not among its ancestors
    AnchorNotInHistory { tag: String, commit_hash: String },
    /// Working tree has uncommitted changes
    DirtyWorkingTree,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::TagAheadOfHead { tag, commit_hash } => {
                write!(
                    f,
                    "Tag '{}' points at {} which is newer than HEAD",
                    tag,
                    abbreviate(commit_hash, 7)
                )
            }
            BoundaryWarning::AnchorNotInHistory { tag, commit_hash } => {
                write!(
                    f,
                    "Tag '{}' points at {} which is not an ancestor of HEAD",
                    tag,
                    abbreviate(commit_hash, 7)
                )
            }
            BoundaryWarning::DirtyWorkingTree => {
                write!(f, "Working tree has uncommitted changes")
            }
        }
    }
}
