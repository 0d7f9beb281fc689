//! Page and listing rendering.
//!
//! The last stage: binds collected [`Post`] records into the two layouts
//! and hands the rendered pages to the output sink.
//!
//! - **Post pages**: one per record at `<slug>/index.html`, from the post
//!   layout with `{{title}}`, `{{description}}`, `{{formattedDate}}`,
//!   `{{isoDate}}`, `{{tags}}` and `{{content}}` bound.
//! - **Listing page**: one summary card per record, concatenated in record
//!   order and bound to `{{posts}}` in the listing layout, at `index.html`.
//!
//! An unreadable layout is a configuration error and aborts the build;
//! pages already written stay on disk.

use crate::collect::Post;
use crate::store::{Layout, OutputSink, TemplateStore};
use crate::template;
use maud::{Markup, PreEscaped, html};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("cannot read layout {0:?}: {1}")]
    Template(&'static str, #[source] std::io::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render every post page. Returns the urls of the pages built, in order.
pub fn build_posts(
    posts: &[Post],
    templates: &dyn TemplateStore,
    sink: &mut dyn OutputSink,
) -> Result<Vec<String>, BuildError> {
    let layout = load_layout(templates, Layout::Post)?;

    let mut built = Vec::with_capacity(posts.len());
    for post in posts {
        let page = template::render(&layout, &page_vars(post));
        sink.write(&format!("{}/index.html", post.slug), &page)?;
        built.push(post.url.clone());
    }
    Ok(built)
}

/// Render the aggregate listing page.
pub fn build_listing(
    posts: &[Post],
    templates: &dyn TemplateStore,
    sink: &mut dyn OutputSink,
) -> Result<(), BuildError> {
    let layout = load_layout(templates, Layout::Listing)?;

    let cards: Vec<String> = posts.iter().map(|p| post_card(p).into_string()).collect();
    let page = template::render(&layout, &BTreeMap::from([("posts", cards.join("\n"))]));
    sink.write("index.html", &page)?;
    Ok(())
}

fn load_layout(templates: &dyn TemplateStore, layout: Layout) -> Result<String, BuildError> {
    templates
        .load(layout)
        .map_err(|err| BuildError::Template(layout.file_name(), err))
}

fn page_vars(post: &Post) -> BTreeMap<&'static str, String> {
    BTreeMap::from([
        ("title", post.title.clone()),
        ("description", post.description.clone()),
        ("formattedDate", post.formatted_date.clone()),
        ("isoDate", post.iso_date.clone()),
        ("tags", post.tags_html.clone()),
        ("content", post.content.clone()),
    ])
}

/// One listing card. Title and excerpt are escaped by maud; the tag spans
/// are already HTML and pass through.
fn post_card(post: &Post) -> Markup {
    html! {
        article.post-card {
            a.post-card-link href=(post.url) {
                h2 { (post.title) }
                p.post-excerpt { (post.description) }
                div.post-card-meta {
                    time datetime=(post.iso_date) { (post.formatted_date) }
                    (PreEscaped(&post.tags_html))
                }
            }
        }
    }
}
