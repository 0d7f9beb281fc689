//! Placeholder substitution for layout files.
//!
//! Layouts are opaque text with `{{ name }}` placeholders. Rendering
//! replaces every occurrence of each supplied name; placeholders with no
//! supplied value stay literal, and values are inserted verbatim — any
//! escaping is the caller's job.

use regex::{NoExpand, Regex};
use std::collections::BTreeMap;

/// Replace `{{ name }}` (whitespace around the name tolerated) with the
/// mapped value, for every name in `vars`.
pub fn render(template: &str, vars: &BTreeMap<&str, String>) -> String {
    let mut html = template.to_string();
    for (name, value) in vars {
        // Escaped name is always a valid pattern
        let placeholder =
            Regex::new(&format!(r"\{{\{{\s*{}\s*\}}\}}", regex::escape(name))).unwrap();
        // NoExpand: `$` in replacement values stays literal
        html = placeholder.replace_all(&html, NoExpand(value)).into_owned();
    }
    html
}
