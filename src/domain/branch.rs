use crate::domain::commit::abbreviate;

/// The commit currently checked out, and the branch it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    pub hash: String,
    /// `None` when HEAD is detached
    pub branch: Option<String>,
}

impl Head {
    /// Create a head on a named branch
    pub fn on_branch(hash: impl Into<String>, branch: impl Into<String>) -> Self {
        Head {
            hash: hash.into(),
            branch: Some(branch.into()),
        }
    }

    /// Create a detached head
    pub fn detached(hash: impl Into<String>) -> Self {
        Head {
            hash: hash.into(),
            branch: None,
        }
    }

    pub fn is_detached(&self) -> bool {
        self.branch.is_none()
    }

    /// Abbreviated head hash, at most `len` characters
    pub fn short_hash(&self, len: usize) -> &str {
        abbreviate(&self.hash, len)
    }

    /// Branch name for display, "HEAD" when detached
    pub fn display_name(&self) -> &str {
        self.branch.as_deref().unwrap_or("HEAD")
    }
}
