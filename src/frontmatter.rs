//! Front-matter parsing.
//!
//! Posts open with an optional metadata header delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Hello World
//! date: 2024-06-15
//! tags: [rust, blogging]
//! ---
//! Body starts here.
//! ```
//!
//! The header must sit at the very start of the document. Without it the
//! whole input is treated as body with empty metadata — a missing header is
//! a valid document, not an error.
//!
//! ## Header grammar
//!
//! Each `key: value` line inside the delimiters populates the metadata map.
//! A value bracketed `[...]` is split on commas into a list of trimmed
//! strings; anything else is stored as a trimmed scalar. Lines that don't
//! match the `key: value` shape are ignored. A repeated key keeps its last
//! occurrence.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// A metadata value: a bare string or a bracketed list of strings.
///
/// Multi-valued fields (`tags: [a, b]`) parse to `List`; everything else is
/// `Scalar`. Consumers that expect a list can normalize with [`Value::items`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

impl Value {
    /// The value as display text. Lists join their items with `", "`.
    pub fn as_text(&self) -> String {
        match self {
            Value::Scalar(s) => s.clone(),
            Value::List(items) => items.join(", "),
        }
    }

    /// The value as a sequence: a scalar becomes a one-element sequence.
    pub fn items(&self) -> Vec<&str> {
        match self {
            Value::Scalar(s) => vec![s.as_str()],
            Value::List(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

pub type Metadata = BTreeMap<String, Value>;

/// A document split into its metadata header and markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub meta: Metadata,
    pub body: String,
}

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---\r?\n(.*)\z").unwrap());

static KEY_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\w+):\s*(.+)$").unwrap());

/// Split raw document text into metadata and body.
///
/// Pure function of its input: no I/O, never fails. Absent or malformed
/// delimiters yield empty metadata and the full input as body.
pub fn split(raw: &str) -> FrontMatter {
    let Some(caps) = HEADER.captures(raw) else {
        return FrontMatter {
            meta: Metadata::new(),
            body: raw.to_string(),
        };
    };

    let mut meta = Metadata::new();
    for line in caps[1].lines() {
        let Some(kv) = KEY_LINE.captures(line) else {
            continue;
        };
        // Last occurrence wins on repeated keys
        meta.insert(kv[1].to_string(), parse_value(kv[2].trim()));
    }

    FrontMatter {
        meta,
        body: caps[2].to_string(),
    }
}

fn parse_value(raw: &str) -> Value {
    if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        Value::List(inner.split(',').map(|item| item.trim().to_string()).collect())
    } else {
        Value::Scalar(raw.to_string())
    }
}
