use crate::domain::Version;
use crate::error::{GitSemverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the current directory
pub const PROJECT_CONFIG_FILE: &str = "gitsemver.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".gitsemver.toml";

/// Represents the complete configuration for git-semver.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Settings that shape the resolved version.
///
/// The defaults produce `0.1.0-<ordinal>.<7-char hash>` / `...-<ordinal>.dev`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResolveConfig {
    /// Revision the ancestry walk starts from
    #[serde(default = "default_revision")]
    pub revision: String,

    /// Version reported when no tag qualifies as anchor
    #[serde(default = "default_initial_version")]
    pub initial_version: String,

    /// Build signature used when the working tree is dirty
    #[serde(default = "default_dirty_signature")]
    pub dirty_signature: String,

    /// Number of hash characters in a clean build signature
    #[serde(default = "default_short_hash_length")]
    pub short_hash_length: usize,
}

/// Settings for how the version is printed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    /// Prepended to the printed version (e.g. "v")
    #[serde(default)]
    pub prefix: String,
}

fn default_revision() -> String {
    "HEAD".to_string()
}

fn default_initial_version() -> String {
    "0.1.0".to_string()
}

fn default_dirty_signature() -> String {
    "dev".to_string()
}

fn default_short_hash_length() -> usize {
    7
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ResolveConfig {
    fn default() -> Self {
        ResolveConfig {
            revision: default_revision(),
            initial_version: default_initial_version(),
            dirty_signature: default_dirty_signature(),
            short_hash_length: default_short_hash_length(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resolve: ResolveConfig::default(),
            output: OutputConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl ResolveConfig {
    /// Parsed form of `initial_version`
    pub fn initial_version(&self) -> Result<Version> {
        Version::parse(&self.initial_version)
            .map_err(|e| GitSemverError::config(format!("resolve.initial_version: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.revision.trim().is_empty() {
            return Err(GitSemverError::config("resolve.revision must not be empty"));
        }
        let initial = self.initial_version()?;
        if initial.is_prerelease() {
            return Err(GitSemverError::config(format!(
                "resolve.initial_version must be a release version, got '{}'",
                self.initial_version
            )));
        }
        if self.dirty_signature.is_empty()
            || !self
                .dirty_signature
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(GitSemverError::config(format!(
                "resolve.dirty_signature must be a non-empty [0-9A-Za-z-] identifier, got '{}'",
                self.dirty_signature
            )));
        }
        if !(4..=40).contains(&self.short_hash_length) {
            return Err(GitSemverError::config(format!(
                "resolve.short_hash_length must be between 4 and 40, got {}",
                self.short_hash_length
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.resolve.validate()
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitsemver.toml` in current directory
/// 3. `.gitsemver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// The loaded configuration is validated before it is returned.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        read(Path::new(path))?
    } else if Path::new(PROJECT_CONFIG_FILE).exists() {
        read(Path::new(PROJECT_CONFIG_FILE))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            read(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config = parse_config(&config_str)?;
    Ok(config)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text).map_err(|e| GitSemverError::config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| GitSemverError::config(format!("Cannot read {}: {}", path.display(), e)))
}
