use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use git_semver::boundary::BoundaryWarning;
use git_semver::cli::{self, Mode, Outcome, RunArgs};
use git_semver::{config, ui};

/// Environment variable consulted for the log filter
const LOG_ENV: &str = "GIT_SEMVER_LOG";

#[derive(clap::Parser)]
#[command(
    name = "git-semver",
    version,
    about = "Derive a semantic version from git tags and history"
)]
struct Args {
    #[arg(short, long, default_value = ".", help = "Path inside the repository")]
    path: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Revision to resolve instead of HEAD")]
    revision: Option<String>,

    #[arg(long, conflicts_with = "explain", help = "List tags, most recent first, and exit")]
    list_tags: bool,

    #[arg(long, help = "Show how the version was derived")]
    explain: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[arg(short, long, conflicts_with = "verbose", help = "Only log errors")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(e.exit_code());
        }
    };

    init_logging(args.quiet, args.verbose, &config.log_level);

    let mode = if args.list_tags {
        Mode::ListTags
    } else if args.explain {
        Mode::Explain
    } else {
        Mode::Version
    };

    let run_args = RunArgs {
        path: args.path,
        revision: args.revision,
        mode,
    };

    match cli::run(&run_args, &config) {
        Ok(Outcome::Version(resolution)) => {
            for warning in &resolution.warnings {
                match warning {
                    BoundaryWarning::DirtyWorkingTree => info!("{}", warning),
                    _ => warn!("{}", warning),
                }
            }
            ui::display_version(&resolution.version, &config.output.prefix);
        }
        Ok(Outcome::Tags(tags)) => ui::display_tags(&tags),
        Ok(Outcome::Explained(explanation)) => {
            ui::display_explanation(&explanation);
            ui::display_version(&explanation.resolution.version, &config.output.prefix);
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber.
///
/// Priority: quiet flag > verbose flag > GIT_SEMVER_LOG env > configured level
fn init_logging(quiet: bool, verbose: u8, default_level: &str) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose > 0 {
        EnvFilter::new(if verbose == 1 { "debug" } else { "trace" })
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
