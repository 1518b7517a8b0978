use crate::domain::{Commit, Signature, Version};
use crate::error::Result;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// How a tag is stored in the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// A reference pointing straight at a commit
    Lightweight,
    /// A tag object carrying a tagger and a message
    Annotated,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::Lightweight => write!(f, "lightweight"),
            TagKind::Annotated => write!(f, "annotated"),
        }
    }
}

/// Represents a git tag resolved to the commit it marks.
///
/// `hash` is the tag object's hash for annotated tags and the commit hash
/// for lightweight ones. Equality is by name.
#[derive(Debug, Clone)]
pub struct Tag {
    pub kind: TagKind,
    pub hash: String,
    pub name: String,
    pub tagger: Option<Signature>,
    pub message: Option<String>,
    pub commit: Commit,
}

impl Tag {
    /// Create a lightweight tag pointing at `commit`
    pub fn lightweight(name: impl Into<String>, commit: Commit) -> Self {
        Tag {
            kind: TagKind::Lightweight,
            hash: commit.hash.clone(),
            name: name.into(),
            tagger: None,
            message: None,
            commit,
        }
    }

    /// Create an annotated tag
    pub fn annotated(
        name: impl Into<String>,
        hash: impl Into<String>,
        tagger: Signature,
        message: impl Into<String>,
        commit: Commit,
    ) -> Self {
        Tag {
            kind: TagKind::Annotated,
            hash: hash.into(),
            name: name.into(),
            tagger: Some(tagger),
            message: Some(message.into()),
            commit,
        }
    }

    /// Parse the tag name as a version (e.g., "v1.2.3" -> 1.2.3)
    pub fn version(&self) -> Result<Version> {
        Version::parse(&self.name)
    }

    pub fn before(&self, other: &Tag) -> bool {
        self.commit.before(&other.commit)
    }

    pub fn after(&self, other: &Tag) -> bool {
        self.commit.after(&other.commit)
    }

    /// Most-recent-first ordering by the tagged commit, then tag name
    pub fn cmp_recent_first(&self, other: &Tag) -> Ordering {
        self.commit
            .cmp_recent_first(&other.commit)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Tag {}

/// Tags ordered most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(Vec<Tag>);

impl Tags {
    /// Build a catalog from tags in any order, sorting most recent first
    pub fn from_unsorted(mut tags: Vec<Tag>) -> Self {
        tags.sort_by(Tag::cmp_recent_first);
        Tags(tags)
    }

    /// The most recent tag, if any
    pub fn head(&self) -> Option<&Tag> {
        self.0.first()
    }

    /// First tag, in catalog order, matching `predicate`
    pub fn first<P>(&self, mut predicate: P) -> Option<&Tag>
    where
        P: FnMut(&Tag) -> bool,
    {
        self.0.iter().find(|&tag| predicate(tag))
    }

    /// Last tag, in catalog order, matching `predicate`
    pub fn last<P>(&self, mut predicate: P) -> Option<&Tag>
    where
        P: FnMut(&Tag) -> bool,
    {
        self.0.iter().rev().find(|&tag| predicate(tag))
    }

    /// Split into (matching, non-matching), keeping relative order
    pub fn select<P>(&self, mut predicate: P) -> (Tags, Tags)
    where
        P: FnMut(&Tag) -> bool,
    {
        let (matching, rest): (Vec<Tag>, Vec<Tag>) =
            self.0.iter().cloned().partition(|tag| predicate(tag));
        (Tags(matching), Tags(rest))
    }

    pub fn into_inner(self) -> Vec<Tag> {
        self.0
    }
}

impl Deref for Tags {
    type Target = [Tag];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
