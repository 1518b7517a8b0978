use std::path::PathBuf;

use tracing::{debug, warn};

use crate::analyzer::{Resolution, VersionResolver};
use crate::config::{Config, ResolveConfig};
use crate::domain::{Head, RemoteUrl, Tags};
use crate::error::{GitSemverError, Result};
use crate::git::{list_tags, Git2Repository, Repository};

/// Remote whose URL identifies the project in explanations
pub const ORIGIN: &str = "origin";

/// What the command should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print the resolved version
    #[default]
    Version,
    /// Print the tag catalog
    ListTags,
    /// Print the version and how it was derived
    Explain,
}

/// Arguments for a single invocation
///
/// Mirrors the CLI Args in a form that does not depend on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Directory inside the repository
    pub path: PathBuf,
    /// Overrides `resolve.revision` from the configuration
    pub revision: Option<String>,
    pub mode: Mode,
}

impl Default for RunArgs {
    fn default() -> Self {
        RunArgs {
            path: PathBuf::from("."),
            revision: None,
            mode: Mode::default(),
        }
    }
}

/// Everything `--explain` reports
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub head: Head,
    pub remote: Option<RemoteUrl>,
    pub resolution: Resolution,
}

/// Result of a successful invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Version(Resolution),
    Tags(Tags),
    Explained(Explanation),
}

/// Open the repository at `args.path` and run the requested mode
pub fn run(args: &RunArgs, config: &Config) -> Result<Outcome> {
    let repo = Git2Repository::open(&args.path)?;
    run_with(&repo, args, config)
}

/// Run the requested mode against an already opened repository
pub fn run_with<R: Repository + ?Sized>(repo: &R, args: &RunArgs, config: &Config) -> Result<Outcome> {
    let resolve_config = effective_resolve_config(config, args);
    debug!(mode = ?args.mode, revision = %resolve_config.revision, "running");

    match args.mode {
        Mode::Version => resolve_in(repo, &resolve_config).map(Outcome::Version),
        Mode::ListTags => list_tags(repo).map(Outcome::Tags),
        Mode::Explain => explain(repo, &resolve_config).map(Outcome::Explained),
    }
}

/// Resolution settings after applying command-line overrides
pub fn effective_resolve_config(config: &Config, args: &RunArgs) -> ResolveConfig {
    let mut resolve = config.resolve.clone();
    if let Some(revision) = &args.revision {
        resolve.revision = revision.clone();
    }
    resolve
}

pub fn resolve_in<R: Repository + ?Sized>(repo: &R, config: &ResolveConfig) -> Result<Resolution> {
    VersionResolver::new(config)?.resolve(repo)
}

/// Hosting coordinates of the `origin` remote, if one is configured
pub fn origin_project<R: Repository + ?Sized>(repo: &R) -> Result<Option<RemoteUrl>> {
    repo.remote_url(ORIGIN)?
        .map(|url| RemoteUrl::parse(&url))
        .transpose()
}

/// Resolve and collect the context shown by `--explain`.
///
/// An `origin` URL of an unrecognised shape is reported and left out
/// rather than failing the command.
pub fn explain<R: Repository + ?Sized>(repo: &R, config: &ResolveConfig) -> Result<Explanation> {
    let resolution = resolve_in(repo, config)?;
    let head = repo.head()?;

    let remote = match origin_project(repo) {
        Ok(remote) => remote,
        Err(GitSemverError::InvalidRemoteUrl(url)) => {
            warn!(%url, "origin URL not recognised");
            None
        }
        Err(e) => return Err(e),
    };

    Ok(Explanation {
        head,
        remote,
        resolution,
    })
}
