use crate::error::{GitSemverError, Result};
use std::fmt;
use std::str::FromStr;

/// Semantic version with an ordered list of pre-release identifiers.
///
/// Build metadata is accepted when parsing but never kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<String>,
}

impl Version {
    /// Create a new release version (no pre-release)
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
        }
    }

    /// Parse a version from a tag name (e.g., "v1.2.3" -> Version(1,2,3))
    ///
    /// A single leading `v` or `V` is stripped; the remainder must be a
    /// valid semantic version.
    pub fn parse(tag: &str) -> Result<Self> {
        let clean_tag = tag
            .strip_prefix('v')
            .or_else(|| tag.strip_prefix('V'))
            .unwrap_or(tag);

        let parsed = semver::Version::parse(clean_tag).map_err(|e| {
            GitSemverError::version(format!("Invalid version '{}': {}", tag, e))
        })?;

        let prerelease = if parsed.pre.is_empty() {
            Vec::new()
        } else {
            parsed.pre.as_str().split('.').map(str::to_string).collect()
        };

        Ok(Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            prerelease,
        })
    }

    /// The next patch release, with pre-release identifiers dropped.
    ///
    /// Pre-releases bump too (`1.0.0-rc.1` -> `1.0.1`) so that any build
    /// labelled with the result sorts after the tag it descends from.
    pub fn next(&self) -> Result<Self> {
        let patch = self.patch.checked_add(1).ok_or_else(|| {
            GitSemverError::version(format!("Patch component of {} cannot be incremented", self))
        })?;
        Ok(Version::new(self.major, self.minor, patch))
    }

    /// Replace the pre-release identifiers
    pub fn with_prerelease<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerelease = parts.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }
}

impl FromStr for Version {
    type Err = GitSemverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.is_prerelease() {
            write!(f, "-{}", self.prerelease.join("."))?;
        }
        Ok(())
    }
}
