//! Shared test utilities: in-memory collaborator fakes.
//!
//! The pipeline only talks to the `store` traits, so tests substitute
//! these fakes and never touch the filesystem.

use std::collections::BTreeMap;
use std::io;

use crate::store::{Layout, OutputSink, PostSource, TemplateStore};

/// In-memory post source preserving the given enumeration order.
pub struct MemSource {
    docs: Vec<(String, String)>,
}

impl MemSource {
    pub fn new(docs: &[(&str, &str)]) -> Self {
        Self {
            docs: docs
                .iter()
                .map(|(id, text)| (id.to_string(), text.to_string()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self { docs: Vec::new() }
    }
}

impl PostSource for MemSource {
    fn list(&self) -> io::Result<Vec<String>> {
        Ok(self.docs.iter().map(|(id, _)| id.clone()).collect())
    }

    fn read(&self, id: &str) -> io::Result<String> {
        self.docs
            .iter()
            .find(|(doc_id, _)| doc_id == id)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no such post: {id}")))
    }
}

/// In-memory template store; a `None` layout simulates a missing file.
pub struct MemTemplates {
    post: Option<String>,
    listing: Option<String>,
}

impl MemTemplates {
    pub fn with_layouts(post: &str, listing: &str) -> Self {
        Self {
            post: Some(post.to_string()),
            listing: Some(listing.to_string()),
        }
    }

    pub fn missing_post(listing: &str) -> Self {
        Self {
            post: None,
            listing: Some(listing.to_string()),
        }
    }

    pub fn missing_listing(post: &str) -> Self {
        Self {
            post: Some(post.to_string()),
            listing: None,
        }
    }
}

impl TemplateStore for MemTemplates {
    fn load(&self, layout: Layout) -> io::Result<String> {
        let slot = match layout {
            Layout::Post => &self.post,
            Layout::Listing => &self.listing,
        };
        slot.clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, layout.file_name()))
    }
}

/// In-memory sink recording pages by relative path.
pub struct MemSink {
    pub pages: BTreeMap<String, String>,
}

impl MemSink {
    pub fn new() -> Self {
        Self {
            pages: BTreeMap::new(),
        }
    }

    /// The page at `rel_path`. Panics with the available paths on a miss.
    pub fn page(&self, rel_path: &str) -> &str {
        self.pages.get(rel_path).unwrap_or_else(|| {
            let paths: Vec<&str> = self.pages.keys().map(String::as_str).collect();
            panic!("page '{rel_path}' not written. Available: {paths:?}")
        })
    }
}

impl OutputSink for MemSink {
    fn write(&mut self, rel_path: &str, contents: &str) -> io::Result<()> {
        self.pages.insert(rel_path.to_string(), contents.to_string());
        Ok(())
    }
}
