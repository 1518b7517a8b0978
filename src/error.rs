use thiserror::Error;

/// Unified error type for git-semver operations
#[derive(Error, Debug)]
pub enum GitSemverError {
    #[error("Revision not found: {0}")]
    RevisionNotFound(String),

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Repository access failed: {0}")]
    Repository(#[from] git2::Error),

    #[error("Invalid remote URL: {0}")]
    InvalidRemoteUrl(String),

    #[error("Repository has no commits")]
    EmptyHistory,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semver
pub type Result<T> = std::result::Result<T, GitSemverError>;

/// Coarse classification of a [GitSemverError], used by callers to pick
/// an exit code and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RevisionNotFound,
    ObjectNotFound,
    RepositoryAccess,
    InvalidRemoteUrl,
    Config,
    Other,
}

impl GitSemverError {
    /// Create a revision-not-found error
    pub fn revision_not_found(revision: impl Into<String>) -> Self {
        GitSemverError::RevisionNotFound(revision.into())
    }

    /// Create an object-not-found error
    pub fn object_not_found(hash: impl Into<String>) -> Self {
        GitSemverError::ObjectNotFound(hash.into())
    }

    /// Create an invalid remote URL error
    pub fn invalid_remote_url(url: impl Into<String>) -> Self {
        GitSemverError::InvalidRemoteUrl(url.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitSemverError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GitSemverError::Version(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GitSemverError::RevisionNotFound(_) => ErrorKind::RevisionNotFound,
            GitSemverError::ObjectNotFound(_) => ErrorKind::ObjectNotFound,
            GitSemverError::Repository(_) | GitSemverError::Io(_) => ErrorKind::RepositoryAccess,
            GitSemverError::InvalidRemoteUrl(_) => ErrorKind::InvalidRemoteUrl,
            GitSemverError::Config(_) => ErrorKind::Config,
            GitSemverError::EmptyHistory | GitSemverError::Version(_) => ErrorKind::Other,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::RevisionNotFound => 2,
            ErrorKind::ObjectNotFound => 3,
            ErrorKind::RepositoryAccess => 4,
            ErrorKind::InvalidRemoteUrl => 5,
            ErrorKind::Config => 6,
            ErrorKind::Other => 1,
        }
    }
}
