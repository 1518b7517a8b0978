//! Tag catalog: every tag reference resolved to the commit it marks

use crate::domain::{Tag, Tags};
use crate::error::Result;
use crate::git::Repository;
use tracing::{debug, instrument, trace};

/// List every tag in the repository, most recent first.
///
/// A reference whose target is a tag object becomes an annotated [Tag];
/// a reference pointing straight at a commit becomes a lightweight one.
/// Both sort by the committer time of the commit they resolve to. Any
/// lookup failure aborts the whole listing.
#[instrument(skip(repo))]
pub fn list_tags<R: Repository + ?Sized>(repo: &R) -> Result<Tags> {
    let references = repo.tag_references()?;
    let mut tags = Vec::with_capacity(references.len());

    for reference in references {
        let tag = match repo.find_annotated_tag(&reference.target)? {
            Some(annotated) => {
                let commit = repo.find_commit(&annotated.target)?;
                Tag::annotated(
                    reference.name,
                    annotated.hash,
                    annotated.tagger,
                    annotated.message,
                    commit,
                )
            }
            None => {
                let commit = repo.find_commit(&reference.target)?;
                Tag::lightweight(reference.name, commit)
            }
        };
        trace!(name = %tag.name, kind = %tag.kind, commit = %tag.commit.hash, "catalogued tag");
        tags.push(tag);
    }

    let tags = Tags::from_unsorted(tags);
    debug!(count = tags.len(), "listed tags");
    Ok(tags)
}
