//! Domain values - commits, tags and versions, independent of git access

pub mod branch;
pub mod commit;
pub mod remote;
pub mod signature;
pub mod tag;
pub mod version;

pub use branch::Head;
pub use commit::{Commit, Commits};
pub use remote::RemoteUrl;
pub use signature::Signature;
pub use tag::{Tag, TagKind, Tags};
pub use version::Version;
