//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Every static mapping
//! the metadata subsystem needs lives here: the base URL, the route label
//! registry, per-page SEO overrides, the structured-data records (application,
//! reviews), the web app manifest and the static sitemap routes.
//!
//! Stock defaults describe the Konverter site as deployed. A `config.toml`
//! next to the site only needs the values it wants to override:
//!
//! ```toml
//! base_url = "https://staging.konverter-online.com"
//!
//! [labels]
//! base64-encoder = "Base64 Encoder"
//!
//! [pages."/base64-encoder"]
//! title = "Base64 Encoder | Konverter Online"
//! description = "Encode and decode Base64 in the browser."
//! structured_data = ["application", "breadcrumb"]
//! ```
//!
//! Tables merge key by key (so the `[labels]` above is added to the stock
//! registry), arrays replace wholesale (so a `[[sitemap.routes]]` list replaces
//! the stock route list). Unknown keys are rejected to catch typos early.
//!
//! The merged result is validated once at load time; everything downstream
//! treats the config as immutable.

use crate::content;
use crate::route;
use crate::schema::SchemaKind;
use crate::sitemap::ChangeFrequency;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://www.konverter-online.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute site origin, no trailing slash. Canonical URLs, breadcrumb
    /// URLs and sitemap URLs are all built from it.
    pub base_url: String,
    pub site_name: String,
    /// `dateModified` of the application schema. Build date when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    /// `twitter:site` handle, e.g. `@konverter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_handle: Option<String>,
    /// Site-wide SEO fallbacks for paths without a page entry.
    pub defaults: PageDefaults,
    /// Route label registry: path segment → display label.
    pub labels: BTreeMap<String, String>,
    /// Per-route SEO overrides keyed by normalized path.
    pub pages: BTreeMap<String, PageMeta>,
    pub application: ApplicationConfig,
    pub reviews: ReviewsConfig,
    pub manifest: ManifestConfig,
    pub sitemap: SitemapConfig,
    pub content: ContentConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            site_name: "Konverter Online".to_string(),
            date_modified: None,
            twitter_handle: None,
            defaults: PageDefaults::default(),
            labels: default_labels(),
            pages: default_pages(),
            application: ApplicationConfig::default(),
            reviews: ReviewsConfig::default(),
            manifest: ManifestConfig::default(),
            sitemap: SitemapConfig::default(),
            content: ContentConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are consistent and within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_base_url(&self.base_url)?;
        if self.site_name.trim().is_empty() {
            return Err(invalid("site_name must not be empty"));
        }
        if let Some(date) = &self.date_modified {
            if content::parse_date(date).is_none() {
                return Err(invalid(format!(
                    "date_modified is not a valid date: {date}"
                )));
            }
        }
        for segment in self.labels.keys() {
            if segment.is_empty() || segment.contains('/') {
                return Err(invalid(format!(
                    "labels key must be a single path segment: {segment:?}"
                )));
            }
        }
        for path in self.pages.keys() {
            if *path != route::normalize_path(path) {
                return Err(invalid(format!(
                    "pages key must be a normalized path (e.g. \"/json-formatter\"): {path:?}"
                )));
            }
        }
        self.sitemap.validate()?;
        self.reviews.validate()?;
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Validation(msg.into())
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let host = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"));
    match host {
        None => Err(invalid(format!(
            "base_url must start with http:// or https://: {base_url}"
        ))),
        Some(host) if host.is_empty() => Err(invalid("base_url has no host")),
        Some(_) if base_url.ends_with('/') => Err(invalid(format!(
            "base_url must not end with a slash: {base_url}"
        ))),
        Some(_) => Ok(()),
    }
}

fn validate_priority(what: &str, priority: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&priority) {
        Ok(())
    } else {
        Err(invalid(format!("{what} priority must be 0.0-1.0, got {priority}")))
    }
}

// =============================================================================
// SEO
// =============================================================================

/// Site-wide SEO fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageDefaults {
    pub title: String,
    /// Title for pages whose last segment has a registered label but no
    /// explicit title. `{label}` is replaced with the label.
    pub title_template: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Site-relative or absolute image URL.
    pub og_image: String,
    pub og_image_alt: String,
    pub structured_data: Vec<SchemaKind>,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            title: "Konverter Online | Free Online Developer Tools".to_string(),
            title_template: "{label} | Konverter Online".to_string(),
            description: "Free online developer tools: convert SVG to CSS, Base64 and JSX, \
                          format JSON, minify CSS and generate color palettes. Everything \
                          runs in your browser."
                .to_string(),
            keywords: strings(&[
                "developer tools",
                "svg converter",
                "json formatter",
                "css minifier",
                "online tools",
            ]),
            og_image: "/og-image.png".to_string(),
            og_image_alt: "Konverter Online developer tools".to_string(),
            structured_data: vec![SchemaKind::Breadcrumb],
        }
    }
}

/// Per-page SEO override. Every field is optional; missing fields fall back
/// to [`PageDefaults`] (see `seo::resolve`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<Vec<SchemaKind>>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_labels() -> BTreeMap<String, String> {
    [
        ("svg-to-css", "SVG to CSS"),
        ("svg-to-base64", "SVG to Base64"),
        ("svg-to-jsx", "SVG to JSX"),
        ("json-formatter", "JSON Formatter"),
        ("css-minifier", "CSS Minifier"),
        ("color-generator", "Color Generator"),
        ("blog", "Blog"),
        ("privacy-policy", "Privacy Policy"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn tool_page(title: &str, description: &str, keywords: &[&str]) -> PageMeta {
    PageMeta {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        keywords: Some(strings(keywords)),
        structured_data: Some(vec![SchemaKind::Application, SchemaKind::Breadcrumb]),
        ..PageMeta::default()
    }
}

fn default_pages() -> BTreeMap<String, PageMeta> {
    let mut pages = BTreeMap::new();
    pages.insert(
        "/".to_string(),
        PageMeta {
            og_title: Some("Konverter Online | Free Developer Tools".to_string()),
            structured_data: Some(vec![SchemaKind::Application, SchemaKind::Review]),
            ..PageMeta::default()
        },
    );
    pages.insert(
        "/svg-to-css".to_string(),
        tool_page(
            "SVG to CSS Converter | Konverter Online",
            "Convert SVG files into CSS background images and data URIs instantly.",
            &["svg to css", "svg background", "css data uri"],
        ),
    );
    pages.insert(
        "/svg-to-base64".to_string(),
        tool_page(
            "SVG to Base64 Converter | Konverter Online",
            "Encode SVG markup as Base64 data URIs for HTML, CSS and email templates.",
            &["svg to base64", "base64 encoder", "data uri"],
        ),
    );
    pages.insert(
        "/svg-to-jsx".to_string(),
        tool_page(
            "SVG to JSX Converter | Konverter Online",
            "Turn SVG markup into ready-to-use React JSX components.",
            &["svg to jsx", "svg to react", "react svg component"],
        ),
    );
    pages.insert(
        "/json-formatter".to_string(),
        tool_page(
            "JSON Formatter & Validator | Konverter Online",
            "Format, validate and beautify JSON with syntax highlighting.",
            &["json formatter", "json validator", "json beautifier"],
        ),
    );
    pages.insert(
        "/css-minifier".to_string(),
        tool_page(
            "CSS Minifier | Konverter Online",
            "Minify CSS to shrink stylesheets and speed up page loads.",
            &["css minifier", "minify css", "css compressor"],
        ),
    );
    pages.insert(
        "/color-generator".to_string(),
        tool_page(
            "Color Palette Generator | Konverter Online",
            "Generate harmonious color palettes and export them as CSS variables.",
            &["color generator", "color palette", "css colors"],
        ),
    );
    pages.insert(
        "/blog".to_string(),
        PageMeta {
            title: Some("Blog | Konverter Online".to_string()),
            description: Some(
                "Guides and tips on SVG, CSS, JSON and front-end tooling.".to_string(),
            ),
            structured_data: Some(vec![SchemaKind::Breadcrumb]),
            ..PageMeta::default()
        },
    );
    pages.insert(
        "/privacy-policy".to_string(),
        PageMeta {
            title: Some("Privacy Policy | Konverter Online".to_string()),
            description: Some("How Konverter Online handles your data.".to_string()),
            structured_data: Some(vec![]),
            ..PageMeta::default()
        },
    );
    pages
}

// =============================================================================
// Structured data records
// =============================================================================

/// Web application description emitted as the application JSON-LD schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApplicationConfig {
    pub name: String,
    pub description: String,
    /// Defaults to the base URL when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub application_category: String,
    pub operating_system: String,
    pub browser_requirements: String,
    pub features: Vec<String>,
    pub price: String,
    pub price_currency: String,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: "Konverter Online".to_string(),
            description: "A collection of free browser-based tools for web developers."
                .to_string(),
            url: None,
            application_category: "DeveloperApplication".to_string(),
            operating_system: "Any".to_string(),
            browser_requirements: "Requires JavaScript. Requires HTML5.".to_string(),
            features: strings(&[
                "SVG to CSS conversion",
                "SVG to Base64 encoding",
                "SVG to JSX conversion",
                "JSON formatting and validation",
                "CSS minification",
                "Color palette generation",
            ]),
            price: "0".to_string(),
            price_currency: "EUR".to_string(),
            author_name: "Konverter Online".to_string(),
            author_url: None,
        }
    }
}

/// Aggregate rating and literal reviews for the review JSON-LD schema.
///
/// `reviewCount` is always derived from `items`; a separate historical total
/// may be supplied as `rating_count` and is emitted as `ratingCount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReviewsConfig {
    /// Name of the reviewed item. Falls back to the application name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    pub best_rating: f64,
    pub worst_rating: f64,
    /// Explicit aggregate value. Mean of `items` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_value: Option<f64>,
    /// Total number of ratings collected, including ones without text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u32>,
    pub items: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Review {
    pub author: String,
    pub date_published: String,
    pub body: String,
    pub rating: f64,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        let review = |author: &str, date: &str, body: &str, rating: f64| Review {
            author: author.to_string(),
            date_published: date.to_string(),
            body: body.to_string(),
            rating,
        };
        Self {
            item_name: None,
            best_rating: 5.0,
            worst_rating: 1.0,
            rating_value: None,
            rating_count: None,
            items: vec![
                review(
                    "Lena M.",
                    "2024-03-12",
                    "The SVG to CSS converter saves me a trip to the terminal every day.",
                    5.0,
                ),
                review(
                    "Tobias K.",
                    "2024-05-02",
                    "Fast JSON formatter that does not upload my data anywhere.",
                    5.0,
                ),
                review(
                    "Priya S.",
                    "2024-07-19",
                    "SVG to JSX output drops straight into my React components.",
                    4.0,
                ),
            ],
        }
    }
}

impl ReviewsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.best_rating <= self.worst_rating {
            return Err(invalid("reviews.best_rating must exceed reviews.worst_rating"));
        }
        let bounds = self.worst_rating..=self.best_rating;
        for review in &self.items {
            if review.author.trim().is_empty() {
                return Err(invalid("review with empty author"));
            }
            if !bounds.contains(&review.rating) {
                return Err(invalid(format!(
                    "review by {} has rating {} outside {}-{}",
                    review.author, review.rating, self.worst_rating, self.best_rating
                )));
            }
            if content::parse_date(&review.date_published).is_none() {
                return Err(invalid(format!(
                    "review by {} has invalid date_published: {}",
                    review.author, review.date_published
                )));
            }
        }
        if let Some(value) = self.rating_value {
            if !bounds.contains(&value) {
                return Err(invalid(format!(
                    "reviews.rating_value {value} outside {}-{}",
                    self.worst_rating, self.best_rating
                )));
            }
        }
        if let Some(count) = self.rating_count {
            if (count as usize) < self.items.len() {
                return Err(invalid(format!(
                    "reviews.rating_count {count} is smaller than the {} listed reviews",
                    self.items.len()
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Web app manifest
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        let icon = |src: &str, sizes: &str| ManifestIcon {
            src: src.to_string(),
            sizes: sizes.to_string(),
            mime_type: "image/png".to_string(),
        };
        Self {
            name: "Konverter Online".to_string(),
            short_name: "Konverter".to_string(),
            description: "Free online developer tools".to_string(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            background_color: "#ffffff".to_string(),
            theme_color: "#2563eb".to_string(),
            icons: vec![
                icon("/icon-192.png", "192x192"),
                icon("/icon-512.png", "512x512"),
            ],
        }
    }
}

// =============================================================================
// Sitemap
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SitemapConfig {
    /// Path under which blog posts live (`/blog` → `/blog/{id}`).
    pub post_prefix: String,
    pub post_priority: f64,
    pub post_change_frequency: ChangeFrequency,
    /// Hand-maintained static routes, in display order.
    pub routes: Vec<SitemapRoute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SitemapRoute {
    pub path: String,
    pub priority: f64,
    pub change_frequency: ChangeFrequency,
    /// Build time when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        let route = |path: &str, priority: f64, change_frequency| SitemapRoute {
            path: path.to_string(),
            priority,
            change_frequency,
            last_modified: None,
        };
        Self {
            post_prefix: "/blog".to_string(),
            post_priority: 0.7,
            post_change_frequency: ChangeFrequency::Monthly,
            routes: vec![
                route("/", 1.0, ChangeFrequency::Weekly),
                route("/svg-to-css", 0.9, ChangeFrequency::Monthly),
                route("/svg-to-base64", 0.9, ChangeFrequency::Monthly),
                route("/svg-to-jsx", 0.9, ChangeFrequency::Monthly),
                route("/json-formatter", 0.9, ChangeFrequency::Monthly),
                route("/css-minifier", 0.9, ChangeFrequency::Monthly),
                route("/color-generator", 0.9, ChangeFrequency::Monthly),
                route("/blog", 0.8, ChangeFrequency::Weekly),
                route("/privacy-policy", 0.3, ChangeFrequency::Yearly),
            ],
        }
    }
}

impl SitemapConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.post_prefix != route::normalize_path(&self.post_prefix) || self.post_prefix == "/"
        {
            return Err(invalid(format!(
                "sitemap.post_prefix must be a normalized, non-root path: {:?}",
                self.post_prefix
            )));
        }
        validate_priority("sitemap.post", self.post_priority)?;
        let mut seen = HashSet::new();
        for r in &self.routes {
            if !r.path.starts_with('/') {
                return Err(invalid(format!(
                    "sitemap route path must start with '/': {:?}",
                    r.path
                )));
            }
            if has_dot_segment(&r.path) {
                return Err(invalid(format!(
                    "sitemap route path must not contain '.' or '..' segments: {:?}",
                    r.path
                )));
            }
            validate_priority(&format!("sitemap route {}", r.path), r.priority)?;
            if !seen.insert(route::normalize_path(&r.path)) {
                return Err(invalid(format!("duplicate sitemap route: {}", r.path)));
            }
            if let Some(date) = &r.last_modified {
                if content::parse_date(date).is_none() {
                    return Err(invalid(format!(
                        "sitemap route {} has invalid last_modified: {date}",
                        r.path
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Head fragments are written to a file named after the route, so relative
/// segments would escape the output directory.
fn has_dot_segment(path: &str) -> bool {
    route::segments(path)
        .iter()
        .any(|s| matches!(s.trim(), "." | ".."))
}

/// Where blog posts are read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Posts directory, relative to the site directory.
    pub posts_dir: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            posts_dir: "posts".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, on top of stock
/// defaults.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a commented starter `config.toml`.
///
/// Used by the `gen-config` CLI command. Values shown are the defaults.
pub fn stock_config_toml() -> &'static str {
    r##"# Konverter Meta Configuration
# ============================
# All settings are optional. Values shown below are the defaults.
# Tables merge with the defaults key by key; arrays replace them.
# Unknown keys will cause an error.

# Absolute site origin, without trailing slash.
base_url = "https://www.konverter-online.com"
site_name = "Konverter Online"

# dateModified of the application schema (YYYY-MM-DD). Build date if unset.
# date_modified = "2025-01-15"

# twitter:site handle.
# twitter_handle = "@konverter"

# ---------------------------------------------------------------------------
# Site-wide SEO fallbacks (used for paths without a [pages] entry)
# ---------------------------------------------------------------------------
[defaults]
title = "Konverter Online | Free Online Developer Tools"
# Used when a page has a registered label but no explicit title.
title_template = "{label} | Konverter Online"
og_image = "/og-image.png"
og_image_alt = "Konverter Online developer tools"
# One or more of "application", "review", "breadcrumb".
structured_data = ["breadcrumb"]

# ---------------------------------------------------------------------------
# Route labels: path segment -> display label (breadcrumbs, titles)
# Unlisted segments are shown with their first letter capitalized.
# ---------------------------------------------------------------------------
[labels]
svg-to-css = "SVG to CSS"
svg-to-base64 = "SVG to Base64"
svg-to-jsx = "SVG to JSX"
json-formatter = "JSON Formatter"
css-minifier = "CSS Minifier"
color-generator = "Color Generator"
blog = "Blog"
privacy-policy = "Privacy Policy"

# ---------------------------------------------------------------------------
# Per-page overrides, keyed by normalized path
# ---------------------------------------------------------------------------
# [pages."/json-formatter"]
# title = "JSON Formatter & Validator | Konverter Online"
# description = "Format, validate and beautify JSON with syntax highlighting."
# keywords = ["json formatter", "json validator"]
# og_image = "/og/json-formatter.png"
# structured_data = ["application", "breadcrumb"]

# ---------------------------------------------------------------------------
# Application schema
# ---------------------------------------------------------------------------
[application]
name = "Konverter Online"
application_category = "DeveloperApplication"
operating_system = "Any"
price = "0"
price_currency = "EUR"
author_name = "Konverter Online"

# ---------------------------------------------------------------------------
# Review schema. reviewCount is always the number of [[reviews.items]].
# ---------------------------------------------------------------------------
[reviews]
best_rating = 5.0
worst_rating = 1.0
# rating_value = 4.8     # mean of the reviews if unset
# rating_count = 120     # historical total, emitted as ratingCount

# [[reviews.items]]
# author = "Lena M."
# date_published = "2024-03-12"
# body = "The SVG to CSS converter saves me a trip to the terminal every day."
# rating = 5.0

# ---------------------------------------------------------------------------
# Web app manifest
# ---------------------------------------------------------------------------
[manifest]
name = "Konverter Online"
short_name = "Konverter"
start_url = "/"
display = "standalone"
background_color = "#ffffff"
theme_color = "#2563eb"

# ---------------------------------------------------------------------------
# Sitemap
# ---------------------------------------------------------------------------
[sitemap]
post_prefix = "/blog"
post_priority = 0.7
post_change_frequency = "monthly"

# [[sitemap.routes]]
# path = "/"
# priority = 1.0
# change_frequency = "weekly"

# ---------------------------------------------------------------------------
# Content
# ---------------------------------------------------------------------------
[content]
# Blog posts (*.md with +++ TOML front matter), relative to the site directory.
posts_dir = "posts"
"##
}
