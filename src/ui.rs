//! Terminal output.
//!
//! `format_*` functions build the text and are pure; `display_*` functions
//! print it. The resolved version goes to stdout, everything else to stderr
//! so the version can be captured by scripts.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::Explanation;
use crate::domain::commit::abbreviate;
use crate::domain::{Tags, Version};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a warning with a yellow marker.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("warning:").yellow(), warning);
}

/// Print the resolved version on stdout.
pub fn display_version(version: &Version, prefix: &str) {
    println!("{}", format_version(version, prefix));
}

pub fn format_version(version: &Version, prefix: &str) -> String {
    format!("{}{}", prefix, version)
}

/// One line per tag: name, kind, abbreviated commit, commit subject.
pub fn format_tags(tags: &Tags) -> Vec<String> {
    let width = tags.iter().map(|t| t.name.len()).max().unwrap_or(0);

    tags.iter()
        .map(|tag| {
            format!(
                "{:<width$}  {:<11}  {}  {}",
                tag.name,
                tag.kind.to_string(),
                tag.commit.short_hash(7),
                tag.commit.one_line(),
                width = width
            )
        })
        .collect()
}

pub fn display_tags(tags: &Tags) {
    if tags.is_empty() {
        eprintln!("{}", style("No tags found").dim());
        return;
    }
    for line in format_tags(tags) {
        println!("{}", line);
    }
}

/// Human-readable account of how the version was derived.
pub fn format_explanation(explanation: &Explanation) -> Vec<String> {
    let resolution = &explanation.resolution;
    let mut lines = vec![format!(
        "HEAD:      {} ({})",
        explanation.head.short_hash(7),
        explanation.head.display_name()
    )];

    if resolution.commit != explanation.head.hash {
        lines.push(format!("Revision:  {}", abbreviate(&resolution.commit, 7)));
    }

    if let Some(remote) = &explanation.remote {
        lines.push(format!("Project:   {}", remote));
    }

    match &resolution.anchor {
        Some(tag) => lines.push(format!(
            "Anchor:    {} at {} ({})",
            tag.name,
            tag.commit.short_hash(7),
            tag.commit.one_line()
        )),
        None => lines.push("Anchor:    none".to_string()),
    }

    match resolution.ordinal {
        Some(ordinal) => lines.push(format!("Ordinal:   {}", ordinal)),
        None => lines.push("Ordinal:   exact tag".to_string()),
    }
    lines.push(format!("Signature: {}", resolution.signature));
    lines.push(format!("Version:   {}", resolution.version));
    lines
}

pub fn display_explanation(explanation: &Explanation) {
    eprintln!("{}", style("Version resolution").bold());
    for line in format_explanation(explanation) {
        eprintln!("  {}", line);
    }
    for warning in &explanation.resolution.warnings {
        display_boundary_warning(warning);
    }
}
