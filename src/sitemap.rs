//! Sitemap building.
//!
//! Merges the hand-maintained static routes from `[sitemap]` config with one
//! entry per blog post from a [`ContentStore`]:
//!
//! | Entry | Priority | Change frequency |
//! |-------|----------|------------------|
//! | home | 1.0 | weekly |
//! | tools | 0.9 | monthly |
//! | blog index | 0.8 | weekly |
//! | blog posts | 0.7 | monthly |
//! | legal | 0.3 | yearly |
//!
//! (stock values; all configurable)
//!
//! ## Guarantees
//!
//! - **Unique URLs**: a post whose URL collides with a static route or an
//!   earlier post is dropped with a warning.
//! - **Deterministic order**: entries are sorted by priority descending, then
//!   URL ascending, so the output is diff-stable whatever order the content
//!   store returns posts in.
//! - **Degrades, never fails**: if the content store errors, the sitemap holds
//!   the static entries only and a warning is logged.
//!
//! URLs are the same canonical URLs `seo::resolve` produces, so the sitemap
//! and the pages' `<link rel="canonical">` always agree.

use crate::content::{self, ContentStore};
use crate::route;
use crate::site::Site;
use chrono::{DateTime, SecondsFormat, Utc};
use maud::html;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
}

/// Build the full, ordered sitemap.
///
/// `now` stamps static routes without an explicit `last_modified` and posts
/// whose date cannot be parsed.
pub fn build_sitemap(
    site: &Site,
    store: &dyn ContentStore,
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let config = &site.config;
    let mut seen = HashSet::new();
    let mut entries = static_entries(site, now);
    seen.extend(entries.iter().map(|e| e.url.clone()));

    match store.all_posts() {
        Ok(posts) => {
            tracing::debug!(count = posts.len(), "merging blog posts into sitemap");
            for post in posts {
                let path = format!("{}/{}", config.sitemap.post_prefix, post.id);
                let url = route::canonical_url(&config.base_url, &path);
                if !seen.insert(url.clone()) {
                    tracing::warn!(%url, id = %post.id, "duplicate sitemap URL, skipping post");
                    continue;
                }
                let last_modified = content::parse_date(&post.date).unwrap_or_else(|| {
                    tracing::warn!(id = %post.id, date = %post.date, "unparseable post date, using build time");
                    now
                });
                entries.push(SitemapEntry {
                    url,
                    last_modified,
                    change_frequency: config.sitemap.post_change_frequency,
                    priority: config.sitemap.post_priority,
                });
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "content store unavailable, sitemap limited to static routes");
        }
    }

    sort_entries(&mut entries);
    entries
}

/// Entries for the configured static routes, in config order.
pub fn static_entries(site: &Site, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let config = &site.config;
    config
        .sitemap
        .routes
        .iter()
        .map(|r| SitemapEntry {
            url: route::canonical_url(&config.base_url, &r.path),
            last_modified: r
                .last_modified
                .as_deref()
                .and_then(content::parse_date)
                .unwrap_or(now),
            change_frequency: r.change_frequency,
            priority: r.priority,
        })
        .collect()
}

/// Priority descending, then URL ascending.
pub fn sort_entries(entries: &mut [SitemapEntry]) {
    entries.sort_by(|a, b| {
        b.priority
            .total_cmp(&a.priority)
            .then_with(|| a.url.cmp(&b.url))
    });
}

/// Render entries as a sitemap protocol XML document.
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let body = html! {
        urlset xmlns=(SITEMAP_XMLNS) {
            @for entry in entries {
                url {
                    loc { (entry.url) }
                    lastmod { (entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)) }
                    changefreq { (entry.change_frequency.as_str()) }
                    priority { (format!("{:.1}", entry.priority)) }
                }
            }
        }
    };
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}\n",
        body.into_string()
    )
}

/// `robots.txt` allowing everything and pointing crawlers at the sitemap.
pub fn render_robots(site: &Site) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        route::join_url(&site.config.base_url, &["sitemap.xml"])
    )
}
