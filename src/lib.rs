//! # Pagemill
//!
//! A minimal static blog generator. Your filesystem is the data source:
//! a directory of markdown posts with front-matter headers becomes a set
//! of hypertext pages plus an aggregated listing, composed from two
//! placeholder-based layout files.
//!
//! # Architecture: One-Shot Pipeline
//!
//! A build is a single synchronous pass — no incremental state, no
//! concurrency, no partial rebuilds:
//!
//! ```text
//! 1. Collect   posts/      →  ordered Post records   (split + convert + sort)
//! 2. Render    records     →  dist/<slug>/index.html (post layout per record)
//! 3. List      records     →  dist/index.html        (cards into listing layout)
//! ```
//!
//! The pipeline only talks to collaborator traits ([`store::PostSource`],
//! [`store::TemplateStore`], [`store::OutputSink`]), so every stage is
//! testable against in-memory fakes without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`frontmatter`] | `---`-delimited header parsing into metadata + body |
//! | [`markdown`] | markdown → HTML through an ordered rewrite-pass pipeline |
//! | [`format`] | display strings: human/machine dates, tag spans |
//! | [`template`] | `{{ placeholder }}` substitution in layout files |
//! | [`collect`] | enumerate + validate + convert posts into sorted records |
//! | [`generate`] | render post pages and the listing from the records |
//! | [`store`] | collaborator traits + filesystem implementations |
//! | [`config`] | optional `config.toml` for directories and the base url |
//! | [`output`] | CLI output formatting (pure `format_*` + `print_*`) |
//!
//! # Design Decisions
//!
//! ## A Pass Table, Not a Parser
//!
//! The markdown dialect is small enough that a full AST buys nothing. The
//! converter is an ordered table of regex rewrites over one text buffer,
//! with the two ordering hazards handled structurally: fenced code is
//! stashed before any pass runs, and paragraph wrapping runs last.
//!
//! ## Layouts Are Data
//!
//! Post and listing layouts are plain text files with `{{ name }}`
//! placeholders, swappable without recompiling. Programmatic fragments
//! (tag spans, listing cards) use [Maud](https://maud.lambda.xyz/) so the
//! generated HTML is type-checked and escaped by default.
//!
//! ## Skips Are Data Too
//!
//! A post missing its `title` or `date`, or with an unparseable date, is
//! excluded and reported — one bad post never fails the build. Only an
//! unreadable layout aborts a run.

pub mod collect;
pub mod config;
pub mod format;
pub mod frontmatter;
pub mod generate;
pub mod markdown;
pub mod output;
pub mod store;
pub mod template;

#[cfg(test)]
pub(crate) mod test_helpers;
