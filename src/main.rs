use chrono::Utc;
use clap::{Parser, Subcommand};
use konverter_meta::content::{ContentStore, PostsDirectory};
use konverter_meta::site::Site;
use konverter_meta::{breadcrumb, config, head, output, route, schema, seo, sitemap, webmanifest};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "konverter-meta")]
#[command(about = "SEO metadata, JSON-LD, breadcrumbs and sitemap for the Konverter site")]
#[command(long_about = "\
SEO metadata, JSON-LD, breadcrumbs and sitemap for the Konverter site

Every output is derived from one site directory:

  site/
  ├── config.toml        # Overrides on top of the stock config (optional)
  └── posts/             # Blog posts (*.md with +++ TOML front matter)
      └── json-tips.md

Route paths are normalized before lookup: '/blog/', 'blog' and '//blog'
all mean '/blog'.

Run 'konverter-meta gen-config' to print a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    site: PathBuf,

    /// Log debug detail to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Where to read blog posts from.
#[derive(clap::Args, Clone)]
struct PostsArgs {
    /// Posts directory (defaults to content.posts_dir inside the site directory)
    #[arg(long)]
    posts: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved SEO metadata for a route
    Meta {
        path: String,
        /// Print the full bundle as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the <head> fragment for a route
    Head { path: String },
    /// Print the breadcrumb trail for a route
    Breadcrumbs {
        path: String,
        /// Render the trail as HTML instead of a list
        #[arg(long, conflicts_with = "json")]
        html: bool,
        /// Print the trail as JSON `{label, href, current}` items
        #[arg(long)]
        json: bool,
    },
    /// Print every JSON-LD payload for a route
    Schema { path: String },
    /// Build the sitemap and write it as XML
    Sitemap {
        #[command(flatten)]
        posts: PostsArgs,
        /// Output file
        #[arg(long, default_value = "sitemap.xml")]
        output: PathBuf,
    },
    /// Write sitemap.xml, robots.txt, manifest.webmanifest and head fragments
    Build {
        #[command(flatten)]
        posts: PostsArgs,
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Validate the site configuration without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let today = Utc::now().date_naive();

    match cli.command {
        Command::Meta { path, json } => {
            let site = Site::load(&cli.site)?;
            if !seo::is_known(&site, &path) {
                tracing::debug!(path = %path, "no page entry, using site defaults");
            }
            let resolved = seo::resolve(&site, &path);
            if json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                output::print_seo_output(&resolved);
            }
        }
        Command::Head { path } => {
            let site = Site::load(&cli.site)?;
            println!("{}", head::render_head(&site, &path, today).into_string());
        }
        Command::Breadcrumbs { path, html, json } => {
            let site = Site::load(&cli.site)?;
            let trail = breadcrumb::ui_trail(&site, &path);
            if html {
                println!("{}", breadcrumb::render_breadcrumbs(&trail).into_string());
            } else if json {
                println!("{}", serde_json::to_string_pretty(&trail)?);
            } else {
                output::print_breadcrumb_output(&trail);
            }
        }
        Command::Schema { path } => {
            let site = Site::load(&cli.site)?;
            let resolved = seo::resolve(&site, &path);
            for kind in &resolved.structured_data {
                let value = schema::emit(&site, *kind, &path, today);
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        }
        Command::Sitemap {
            posts,
            output: out_file,
        } => {
            let site = Site::load(&cli.site)?;
            let store = posts_store(&site, &cli.site, &posts);
            let entries = sitemap::build_sitemap(&site, &store, Utc::now());
            write_file(&out_file, &sitemap::render_sitemap_xml(&entries))?;
            output::print_sitemap_output(&entries, post_count(&site, &entries));
        }
        Command::Build {
            posts,
            output: out_dir,
        } => {
            let site = Site::load(&cli.site)?;
            let store = posts_store(&site, &cli.site, &posts);
            println!("==> Building {}", out_dir.display());
            let written = build(&site, &store, &out_dir)?;
            output::print_build_output(&written);
        }
        Command::Check => {
            println!("==> Checking {}", cli.site.display());
            let site = Site::load(&cli.site)?;
            output::print_check_output(&site);
            println!("==> Configuration is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "konverter_meta=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn posts_store(site: &Site, site_dir: &Path, args: &PostsArgs) -> PostsDirectory {
    let dir = args
        .posts
        .clone()
        .unwrap_or_else(|| site.posts_dir(site_dir));
    let store = PostsDirectory::new(dir);
    tracing::debug!(dir = %store.root().display(), "reading blog posts");
    store
}

/// Number of entries that live under the blog post prefix.
fn post_count(site: &Site, entries: &[sitemap::SitemapEntry]) -> usize {
    let prefix = format!(
        "{}/",
        route::canonical_url(&site.config.base_url, &site.config.sitemap.post_prefix)
    );
    entries.iter().filter(|e| e.url.starts_with(&prefix)).count()
}

/// Write every build artifact into `out_dir`, returning the written paths.
fn build(
    site: &Site,
    store: &dyn ContentStore,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let now = Utc::now();
    let today = now.date_naive();
    let mut written = Vec::new();

    let entries = sitemap::build_sitemap(site, store, now);
    let path = out_dir.join("sitemap.xml");
    write_file(&path, &sitemap::render_sitemap_xml(&entries))?;
    written.push(path);

    let path = out_dir.join("robots.txt");
    write_file(&path, &sitemap::render_robots(site))?;
    written.push(path);

    let manifest = webmanifest::web_manifest(&site.config.manifest);
    let path = out_dir.join("manifest.webmanifest");
    write_file(&path, &serde_json::to_string_pretty(&manifest)?)?;
    written.push(path);

    for r in &site.config.sitemap.routes {
        let path = out_dir.join("head").join(head_file_name(&r.path));
        write_file(&path, &head::render_head(site, &r.path, today).into_string())?;
        written.push(path);
    }

    Ok(written)
}

/// `/` → `index.html`, `/blog/archive` → `blog/archive.html`.
fn head_file_name(path: &str) -> PathBuf {
    let segments = route::segments(path);
    if segments.is_empty() {
        return PathBuf::from("index.html");
    }
    PathBuf::from(format!("{}.html", segments.join("/")))
}

fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}
