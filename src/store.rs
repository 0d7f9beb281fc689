//! Collaborator boundaries: where posts come from, where layouts come
//! from, where rendered pages go.
//!
//! The pipeline talks to these traits, not to fixed paths, so tests swap
//! in in-memory fakes and the CLI wires up the filesystem implementations.
//! Errors at this boundary are plain `io::Error`; the pipeline layers
//! decide what is fatal and what is skippable.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Read side: enumerate post identifiers and fetch their raw text.
pub trait PostSource {
    fn list(&self) -> io::Result<Vec<String>>;
    fn read(&self, id: &str) -> io::Result<String>;
}

/// The two layouts a site is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Post,
    Listing,
}

impl Layout {
    pub fn file_name(self) -> &'static str {
        match self {
            Layout::Post => "post.html",
            Layout::Listing => "listing.html",
        }
    }
}

/// Layout text provider.
pub trait TemplateStore {
    fn load(&self, layout: Layout) -> io::Result<String>;
}

/// Write side: store a rendered page at a path relative to the output root.
pub trait OutputSink {
    fn write(&mut self, rel_path: &str, contents: &str) -> io::Result<()>;
}

// ============================================================================
// Filesystem implementations
// ============================================================================

/// Posts from a flat directory of `*.md` files.
pub struct FsPostSource {
    dir: PathBuf,
}

impl FsPostSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl PostSource for FsPostSource {
    /// Markdown filenames in the posts directory, sorted for deterministic
    /// enumeration.
    fn list(&self) -> io::Result<Vec<String>> {
        let mut ids: Vec<String> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .map(|ext| ext.eq_ignore_ascii_case("md"))
                        .unwrap_or(false)
            })
            .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        ids.sort();
        Ok(ids)
    }

    fn read(&self, id: &str) -> io::Result<String> {
        fs::read_to_string(self.dir.join(id))
    }
}

/// Layouts from a templates directory.
pub struct FsTemplateStore {
    dir: PathBuf,
}

impl FsTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateStore for FsTemplateStore {
    fn load(&self, layout: Layout) -> io::Result<String> {
        fs::read_to_string(self.dir.join(layout.file_name()))
    }
}

/// Pages written under an output root, creating directories as needed.
pub struct FsOutputSink {
    root: PathBuf,
}

impl FsOutputSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl OutputSink for FsOutputSink {
    fn write(&mut self, rel_path: &str, contents: &str) -> io::Result<()> {
        let path = self.root.join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    }
}
