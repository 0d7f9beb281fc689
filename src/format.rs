//! Display-string derivation from post metadata.
//!
//! Pure helpers used by the collector: date parsing and rendering, and the
//! tag span markup. Date parsing is the only fallible operation here, and
//! its failure means "skip this post", decided by the caller — never a
//! build-fatal error.

use crate::frontmatter::Value;
use chrono::NaiveDate;
use maud::html;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("unparseable date {0:?}")]
    InvalidDate(String),
}

/// Accepted date spellings, tried in order. ISO is canonical; the others
/// cover human-entered front matter.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y"];

pub fn parse_date(raw: &str) -> Result<NaiveDate, DateError> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| DateError::InvalidDate(raw.to_string()))
}

/// Human-readable date: `June 15, 2024`. English month names, no day padding.
pub fn human_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Machine-sortable calendar date: `2024-06-15`.
pub fn machine_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Render tag metadata as inline spans.
///
/// A bare scalar (`tags: rust`) is treated as a one-tag list. No tags at
/// all renders as the empty string so layouts without tags stay clean.
pub fn tags_html(tags: Option<&Value>) -> String {
    let Some(value) = tags else {
        return String::new();
    };
    let tags = value.items();
    if tags.is_empty() {
        return String::new();
    }
    html! {
        @for tag in &tags {
            span.tag { (tag) }
        }
    }
    .into_string()
}
