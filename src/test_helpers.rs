//! Shared test utilities.
//!
//! Fixture builders for sites, breadcrumbs and posts, a content store that
//! always fails, and lookups that panic with a clear message on miss.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = stock_site();
//! let sitemap = build_sitemap(&site, &vec![post("my-post", "2024-06-01")], now());
//! let entry = find_entry(&sitemap, &format!("{BASE_URL}/blog/my-post"));
//! assert_eq!(entry.priority, 0.7);
//! ```

use chrono::{DateTime, TimeZone, Utc};

use crate::breadcrumb::Crumb;
use crate::config::SiteConfig;
use crate::content::{BlogPostSummary, ContentError, ContentStore};
use crate::site::Site;
use crate::sitemap::SitemapEntry;

pub const BASE_URL: &str = "https://www.konverter-online.com";

// =========================================================================
// Fixtures
// =========================================================================

/// Site built from the stock configuration.
pub fn stock_site() -> Site {
    site_with(SiteConfig::default())
}

/// Site built from a custom configuration. Panics if it does not validate.
pub fn site_with(config: SiteConfig) -> Site {
    Site::new(config).unwrap_or_else(|e| panic!("test config must validate: {e}"))
}

pub fn crumb(label: &str, url: &str, current: bool) -> Crumb {
    Crumb {
        label: label.to_string(),
        url: url.to_string(),
        current,
    }
}

pub fn post(id: &str, date: &str) -> BlogPostSummary {
    BlogPostSummary {
        id: id.to_string(),
        date: date.to_string(),
    }
}

/// Fixed build timestamp.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

/// A content store whose backend is always down.
pub struct FailingStore;

impl ContentStore for FailingStore {
    fn all_posts(&self) -> Result<Vec<BlogPostSummary>, ContentError> {
        Err(ContentError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "content backend unreachable",
        )))
    }
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a sitemap entry by URL. Panics if not found.
pub fn find_entry<'a>(sitemap: &'a [SitemapEntry], url: &str) -> &'a SitemapEntry {
    sitemap.iter().find(|e| e.url == url).unwrap_or_else(|| {
        let urls: Vec<&str> = sitemap.iter().map(|e| e.url.as_str()).collect();
        panic!("sitemap entry '{url}' not found. Available: {urls:?}")
    })
}
