pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use analyzer::{resolve, resolve_version, Resolution, VersionResolver};
pub use domain::Version;
pub use error::{ErrorKind, GitSemverError, Result};
