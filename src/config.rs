//! Site configuration.
//!
//! An optional `config.toml` next to the content controls where posts and
//! templates are read from and where the site is written:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! posts_dir = "posts"          # Directory of markdown posts
//! templates_dir = "templates"  # Directory holding post.html and listing.html
//! output_dir = "dist"          # Where rendered pages are written
//! base_url = ""                # Prefix for post links, e.g. "/blog"
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early. A missing file means stock
//! defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub posts_dir: String,
    pub templates_dir: String,
    pub output_dir: String,
    /// Prefix for post urls; "" makes post pages live at `/<slug>/`.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            posts_dir: "posts".to_string(),
            templates_dir: "templates".to_string(),
            output_dir: "dist".to_string(),
            base_url: String::new(),
        }
    }
}

/// Load `config.toml` from `path`, falling back to defaults when absent.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// A documented stock config, printed by `gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    format!(
        r#"# pagemill site configuration
# All options are optional - defaults shown below

posts_dir = "{}"          # Directory of markdown posts
templates_dir = "{}"  # Directory holding post.html and listing.html
output_dir = "{}"           # Where rendered pages are written
base_url = "{}"                # Prefix for post links, e.g. "/blog"
"#,
        defaults.posts_dir, defaults.templates_dir, defaults.output_dir, defaults.base_url
    )
}
