use chrono::{DateTime, FixedOffset, SecondsFormat};
use std::fmt;

/// Authorship or timing information attached to a commit or annotated tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub email: String,
    pub when: DateTime<FixedOffset>,
}

impl Signature {
    /// Create a new signature
    pub fn new(name: impl Into<String>, email: impl Into<String>, when: DateTime<FixedOffset>) -> Self {
        Signature {
            name: name.into(),
            email: email.into(),
            when,
        }
    }

    /// Whether this signature was made strictly before `other`
    pub fn before(&self, other: &Signature) -> bool {
        self.when < other.when
    }

    /// Whether this signature was made strictly after `other`
    pub fn after(&self, other: &Signature) -> bool {
        self.when > other.when
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> {}",
            self.name,
            self.email,
            self.when.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}
