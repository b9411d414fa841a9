//! SEO config resolution.
//!
//! [`resolve`] turns a route path into the full metadata bundle a page needs
//! for its `<head>`. Each field is resolved independently, first non-empty
//! value wins:
//!
//! - **title**: page entry → registered label of the last segment through
//!   `defaults.title_template` → `defaults.title`
//! - **description / keywords / og_image / og_image_alt**: page entry → defaults
//! - **og_title / twitter_title**: page entry → resolved title
//! - **og_description / twitter_description**: page entry → resolved description
//! - **structured_data**: page entry → `defaults.structured_data`
//!
//! The canonical URL is always `base_url + normalize_path(path)`. Unknown
//! paths resolve to the site-wide defaults; resolution never fails.

use crate::config::PageMeta;
use crate::route;
use crate::schema::SchemaKind;
use crate::site::Site;
use serde::Serialize;

/// Fully populated metadata bundle for one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    pub og_title: String,
    pub og_description: String,
    /// Absolute URL.
    pub og_image: String,
    pub og_image_alt: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub structured_data: Vec<SchemaKind>,
}

/// Resolve the metadata bundle for `path`.
pub fn resolve(site: &Site, path: &str) -> SeoConfig {
    let config = &site.config;
    let defaults = &config.defaults;
    let normalized = route::normalize_path(path);
    let empty = PageMeta::default();
    let page = config.pages.get(&normalized).unwrap_or(&empty);

    let title = first(&[page.title.as_deref()])
        .or_else(|| labelled_title(site, &normalized))
        .unwrap_or_else(|| defaults.title.clone());
    let description = first(&[page.description.as_deref(), Some(defaults.description.as_str())])
        .unwrap_or_default();
    let og_image = first(&[page.og_image.as_deref(), Some(defaults.og_image.as_str())])
        .map(|img| route::absolutize(&config.base_url, &img))
        .unwrap_or_default();

    SeoConfig {
        og_title: first(&[page.og_title.as_deref()]).unwrap_or_else(|| title.clone()),
        og_description: first(&[page.og_description.as_deref()])
            .unwrap_or_else(|| description.clone()),
        twitter_title: first(&[page.twitter_title.as_deref(), page.og_title.as_deref()])
            .unwrap_or_else(|| title.clone()),
        twitter_description: first(&[
            page.twitter_description.as_deref(),
            page.og_description.as_deref(),
        ])
        .unwrap_or_else(|| description.clone()),
        og_image_alt: first(&[page.og_image_alt.as_deref(), Some(defaults.og_image_alt.as_str())])
            .unwrap_or_else(|| title.clone()),
        keywords: page
            .keywords
            .clone()
            .unwrap_or_else(|| defaults.keywords.clone()),
        canonical: route::canonical_url(&config.base_url, &normalized),
        structured_data: page
            .structured_data
            .clone()
            .unwrap_or_else(|| defaults.structured_data.clone()),
        title,
        description,
        og_image,
    }
}

/// Whether `path` has an explicit page entry.
pub fn is_known(site: &Site, path: &str) -> bool {
    site.config.pages.contains_key(&route::normalize_path(path))
}

/// Title from the registered label of the last path segment.
///
/// Capitalized fallback labels are not used here: a path nobody registered
/// gets the site-wide default title.
fn labelled_title(site: &Site, normalized: &str) -> Option<String> {
    let segment = route::segments(normalized).pop()?;
    let label = site.labels.get(segment)?;
    Some(
        site.config
            .defaults
            .title_template
            .replace("{label}", label),
    )
}

/// First non-empty value, trimmed.
fn first(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}
