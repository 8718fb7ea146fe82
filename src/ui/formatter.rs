//! Pure formatting functions for UI output.
//!
//! The `format_*` functions build plain text and are what tests look at; the
//! `display_*` functions add styling and print.

use console::style;

use crate::domain::{Tag, Version};

/// "1.2.3 => 1.2.4"
pub fn format_transition(old: &Version, new: &Version) -> String {
    format!("{} => {}", old, new)
}

/// Notice shown before anything happens in dry-run mode
pub fn format_pretend_marker() -> String {
    "PRETEND MODE: no files, commits or tags will be changed".to_string()
}

/// Explanation for the expected tag collision
pub fn format_tag_collision(tag: &str) -> String {
    format!(
        "Tag {} already exists. Nothing was changed; bump the version or delete the tag first.",
        tag
    )
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().for_stderr(), message);
}

/// Format and print a warning in yellow.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().for_stderr(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display the version change, and the pretend marker if nothing will be written.
///
/// # Arguments
/// * `old` - Version currently in the file
/// * `new` - Version after the bump
/// * `dry_run` - Whether this run is in pretend mode
pub fn display_transition(old: &Version, new: &Version, dry_run: bool) {
    println!(
        "\n{} {} => {}",
        style("Version:").bold(),
        style(old).red(),
        style(new).green()
    );
    if dry_run {
        println!("{}", style(format_pretend_marker()).yellow().bold());
    }
}

/// Display the tag a dry run would have created.
pub fn display_would_tag(tag: &Tag) {
    display_status(&format!("Would create tag: {}", style(tag).cyan()));
}

/// Display the plain collision message (not an error trace).
pub fn display_tag_collision(tag: &str) {
    eprintln!("{}", format_tag_collision(tag));
}
