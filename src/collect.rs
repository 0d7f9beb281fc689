//! Post collection: raw documents in, ordered records out.
//!
//! For every document in the source: split front matter, validate the
//! required fields, convert the body, and derive the display strings. The
//! result is the immutable list of [`Post`] records — the only input the
//! page and listing builders see — sorted by date, most recent first.
//!
//! A post missing `title` or `date`, or carrying an unparseable date, is
//! skipped and reported; it never aborts the run. Skips are returned as
//! data so the caller decides how to surface them.

use crate::format::{self, DateError};
use crate::frontmatter::{self, Value};
use crate::markdown;
use crate::store::PostSource;
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A fully-resolved post, ready for page and listing rendering.
///
/// Constructed once by [`collect`], read-only afterward.
#[derive(Debug, Clone)]
pub struct Post {
    /// Identifier with the markdown suffix stripped; forms the output path.
    pub slug: String,
    pub title: String,
    /// Parsed calendar date; the sort key.
    pub date: NaiveDate,
    /// The date exactly as written in the front matter.
    pub date_raw: String,
    /// `June 15, 2024`
    pub formatted_date: String,
    /// `2024-06-15`
    pub iso_date: String,
    pub tags: Vec<String>,
    /// Pre-rendered tag spans ("" when untagged).
    pub tags_html: String,
    /// Optional front-matter description, "" when absent.
    pub description: String,
    /// Converted body fragment.
    pub content: String,
    /// Link target of the post's page: `{base_url}/{slug}/`.
    pub url: String,
}

/// Why a document was left out of the record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingTitleOrDate,
    InvalidDate(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingTitleOrDate => write!(f, "missing title or date"),
            SkipReason::InvalidDate(raw) => write!(f, "unparseable date {raw:?}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Skipped {
    pub id: String,
    pub reason: SkipReason,
}

/// Everything the collection step learned: the ordered records plus the
/// documents it rejected.
#[derive(Debug)]
pub struct Collected {
    pub posts: Vec<Post>,
    pub skipped: Vec<Skipped>,
}

/// Collect all documents from `source` into ordered [`Post`] records.
///
/// Source enumeration order is not relied upon; the date sort is the only
/// ordering contract. The sort is stable, so posts sharing a date keep
/// their enumeration order.
pub fn collect(source: &dyn PostSource, base_url: &str) -> Result<Collected, CollectError> {
    let mut posts = Vec::new();
    let mut skipped = Vec::new();

    for id in source.list()? {
        let raw = source.read(&id)?;
        let fm = frontmatter::split(&raw);

        let (Some(title), Some(date_value)) = (fm.meta.get("title"), fm.meta.get("date")) else {
            skipped.push(Skipped {
                id,
                reason: SkipReason::MissingTitleOrDate,
            });
            continue;
        };

        let date_raw = date_value.as_text();
        let date = match format::parse_date(&date_raw) {
            Ok(date) => date,
            Err(DateError::InvalidDate(raw)) => {
                skipped.push(Skipped {
                    id,
                    reason: SkipReason::InvalidDate(raw),
                });
                continue;
            }
        };

        let slug = strip_markup_suffix(&id).to_string();
        let url = format!("{base_url}/{slug}/");
        posts.push(Post {
            title: title.as_text(),
            date,
            date_raw,
            formatted_date: format::human_date(date),
            iso_date: format::machine_date(date),
            tags: fm
                .meta
                .get("tags")
                .map(|v| v.items().into_iter().map(String::from).collect())
                .unwrap_or_default(),
            tags_html: format::tags_html(fm.meta.get("tags")),
            description: fm
                .meta
                .get("description")
                .map(Value::as_text)
                .unwrap_or_default(),
            content: markdown::to_html(&fm.body),
            slug,
            url,
        });
    }

    // Most recent first; stable, so equal dates keep enumeration order
    posts.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(Collected { posts, skipped })
}

/// Derive the slug: the storage identifier minus its markup-file suffix.
fn strip_markup_suffix(id: &str) -> &str {
    for ext in [".md", ".markdown"] {
        if id.len() > ext.len() {
            let split = id.len() - ext.len();
            if let (Some(stem), Some(tail)) = (id.get(..split), id.get(split..)) {
                if tail.eq_ignore_ascii_case(ext) {
                    return stem;
                }
            }
        }
    }
    id
}
