//! CLI output formatting.
//!
//! Each message has a `format_*` function (pure — no I/O, no side effects)
//! so tests can assert on exact lines, and a `print_*` wrapper that writes
//! to the console. Skip warnings go to stderr; progress goes to stdout.

use crate::collect::{Collected, Skipped};
use std::path::Path;

/// One warning line per skipped document, naming the document and why.
pub fn format_skipped(skipped: &[Skipped]) -> Vec<String> {
    skipped
        .iter()
        .map(|skip| format!("Skipping {}: {}", skip.id, skip.reason))
        .collect()
}

pub fn format_found(count: usize) -> String {
    format!("Found {count} post(s)")
}

pub fn format_no_posts(posts_dir: &Path) -> String {
    format!("No posts found. Add .md files to {}/", posts_dir.display())
}

pub fn format_built_page(url: &str) -> String {
    format!("Built: {url}")
}

pub fn format_build_summary(page_count: usize, output_dir: &Path) -> String {
    format!(
        "Build complete: {page_count} post page(s) + listing in {}",
        output_dir.display()
    )
}

pub fn print_collect_output(collected: &Collected) {
    for line in format_skipped(&collected.skipped) {
        eprintln!("{line}");
    }
    println!("{}", format_found(collected.posts.len()));
}
