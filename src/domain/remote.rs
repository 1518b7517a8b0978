use crate::error::{GitSemverError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const SSH_PATTERN: &str = r"^[\w.-]+@([\w.-]+):([\w.-]+)/([\w.-]+?)(?:\.git)?/?$";
const HTTP_PATTERN: &str = r"^https?://(?:[^@/]+@)?([\w.:-]+)/([\w.-]+)/([\w.-]+?)(?:\.git)?/?$";

static SSH: OnceLock<Regex> = OnceLock::new();
static HTTP: OnceLock<Regex> = OnceLock::new();

// Constant patterns: failing to compile is a bug, not a bad URL
fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("remote URL pattern must compile"))
}

/// Hosting coordinates of a remote, parsed from its URL.
///
/// Two shapes are accepted:
/// - scp-like SSH: `git@github.com:owner/repo.git`
/// - HTTP(S): `https://github.com/owner/repo.git`
///
/// The `.git` suffix is optional in both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    pub host: String,
    pub owner: String,
    pub repo: String,
}

impl RemoteUrl {
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();

        let captures = compiled(&SSH, SSH_PATTERN)
            .captures(url)
            .or_else(|| compiled(&HTTP, HTTP_PATTERN).captures(url))
            .ok_or_else(|| GitSemverError::invalid_remote_url(url))?;

        Ok(RemoteUrl {
            host: captures[1].to_string(),
            owner: captures[2].to_string(),
            repo: captures[3].to_string(),
        })
    }

    /// `owner/repo`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for RemoteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.repo)
    }
}
