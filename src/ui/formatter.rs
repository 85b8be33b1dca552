//! Formatting functions for UI output.
//!
//! Line formatting is pure and testable; the `display_*` functions only print.

use crate::domain::version::short_hash;
use crate::domain::{ClassifiedCommit, Magnitude};
use crate::release::ReleaseInfo;
use console::style;

const MAX_LISTED_COMMITS: usize = 20;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// One line per commit: short hash, magnitude, and the header as written.
///
/// Only the first line of the description is shown.
pub fn format_commit_line(commit: &ClassifiedCommit) -> String {
    let header = match (commit.r#type.as_str(), commit.scope.as_str()) {
        ("", _) => commit.summary().to_string(),
        (t, "") => format!("{}: {}", t, commit.summary()),
        (t, s) => format!("{}({}): {}", t, s, commit.summary()),
    };
    format!(
        "{} {:<5} {}",
        short_hash(&commit.hash),
        commit.magnitude,
        header
    )
}

/// Print the release report.
///
/// Shows the latest, current and next version followed by up to 20 pending
/// commits; releasable commits are highlighted.
pub fn display_release_info(info: &ReleaseInfo) {
    println!("{} {}", style("Latest version:").bold(), info.latest_version);
    println!("{} {}", style("Current tag:   ").bold(), info.current_tag);
    if info.has_next_version() {
        println!(
            "{} {}",
            style("Next version:  ").bold(),
            style(&info.next_version).green()
        );
    } else {
        println!("{} {}", style("Next version:  ").bold(), style("none").dim());
    }

    if info.next_commits.is_empty() {
        return;
    }

    println!(
        "\n{}",
        style(format!("Commits since {}:", info.latest_version)).underlined()
    );
    for commit in info.next_commits.iter().take(MAX_LISTED_COMMITS) {
        let line = format_commit_line(commit);
        match commit.magnitude {
            Magnitude::Major => println!("  {}", style(line).red()),
            Magnitude::Minor => println!("  {}", style(line).yellow()),
            Magnitude::Patch => println!("  {}", style(line).cyan()),
            Magnitude::None | Magnitude::Invalid => println!("  {}", style(line).dim()),
        }
    }
    if info.next_commits.len() > MAX_LISTED_COMMITS {
        println!(
            "  ... and {} more commits",
            info.next_commits.len() - MAX_LISTED_COMMITS
        );
    }
}
