//! Version resolution - combines the tag catalog, ancestry and working tree state

pub mod version_resolver;

pub use version_resolver::{resolve, resolve_version, Resolution, VersionResolver};
