//! Command orchestration
//!
//! Ties configuration, repository access and resolution together for the
//! binary, without depending on clap so the flow can be driven from tests.

pub mod orchestration;

pub use orchestration::{
    effective_resolve_config, explain, origin_project, resolve_in, run, run_with, Explanation,
    Mode, Outcome, RunArgs,
};
