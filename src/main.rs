use clap::{Parser, Subcommand};
use pagemill::{collect, config, generate, output, store};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagemill")]
#[command(about = "Static blog generator for markdown posts")]
#[command(long_about = "\
Static blog generator for markdown posts

Each post is a markdown file with a front-matter header; the build renders
one page per post plus an aggregated listing from two layout files.

Content structure:

  config.toml                # Site config (optional)
  posts/
  ├── hello-world.md         # ---\\ntitle: ...\\ndate: 2024-06-15\\n---  + body
  └── second-post.md
  templates/
  ├── post.html              # {{title}} {{description}} {{formattedDate}}
  │                          # {{isoDate}} {{tags}} {{content}}
  └── listing.html           # {{posts}}
  dist/                      # Output: <slug>/index.html per post + index.html

Posts missing a title or date (or with an unparseable date) are skipped
with a warning; the build continues. A missing layout file aborts the run.

Run 'pagemill gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site config file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Posts directory (overrides config)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Templates directory (overrides config)
    #[arg(long, global = true)]
    templates: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Collect posts and render all pages (the default)
    Build,
    /// Validate posts without writing output
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let site = config::load_config(&cli.config)?;

    let posts_dir = cli
        .source
        .unwrap_or_else(|| PathBuf::from(&site.posts_dir));
    let templates_dir = cli
        .templates
        .unwrap_or_else(|| PathBuf::from(&site.templates_dir));
    let output_dir = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&site.output_dir));

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            println!("==> Collecting posts from {}", posts_dir.display());
            let source = store::FsPostSource::new(&posts_dir);
            let collected = collect::collect(&source, &site.base_url)?;
            output::print_collect_output(&collected);
            if collected.posts.is_empty() {
                println!("{}", output::format_no_posts(&posts_dir));
            }

            println!("==> Rendering pages → {}", output_dir.display());
            let templates = store::FsTemplateStore::new(&templates_dir);
            let mut sink = store::FsOutputSink::new(&output_dir);
            let built = generate::build_posts(&collected.posts, &templates, &mut sink)?;
            for url in &built {
                println!("{}", output::format_built_page(url));
            }
            generate::build_listing(&collected.posts, &templates, &mut sink)?;
            println!("{}", output::format_built_page("/"));

            println!("{}", output::format_build_summary(built.len(), &output_dir));
        }
        Command::Check => {
            println!("==> Checking posts in {}", posts_dir.display());
            let source = store::FsPostSource::new(&posts_dir);
            let collected = collect::collect(&source, &site.base_url)?;
            output::print_collect_output(&collected);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
