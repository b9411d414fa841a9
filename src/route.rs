//! Route path normalization.
//!
//! Every entry point (SEO resolution, breadcrumbs, sitemap) accepts route paths
//! from the outside world, so they all go through the same normalization before
//! any lookup happens:
//!
//! - `"/json-formatter"`   → `"/json-formatter"`
//! - `"/json-formatter/"`  → `"/json-formatter"`
//! - `"json-formatter"`    → `"/json-formatter"`
//! - `"//blog///my-post"`  → `"/blog/my-post"`
//! - `"/blog?page=2#top"`  → `"/blog"`
//! - `""` and `"/"`        → `"/"`
//!
//! Normalization never fails. Malformed input collapses to the closest valid
//! path, with the root as the floor.

/// Split a path into its non-empty `/`-delimited segments.
///
/// Query strings and fragments are dropped first, so `"/blog/?x=1"` yields
/// `["blog"]`. The root path and the empty string both yield no segments.
pub fn segments(path: &str) -> Vec<&str> {
    strip_query(path)
        .split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Normalize a route path: leading slash, no empty segments, no trailing slash
/// except for the root itself.
pub fn normalize_path(path: &str) -> String {
    let parts = segments(path);
    if parts.is_empty() {
        return "/".to_string();
    }
    format!("/{}", parts.join("/"))
}

/// Join a base URL with path segments.
///
/// The base URL is expected without a trailing slash; with no segments the base
/// URL is returned unchanged.
pub fn join_url(base_url: &str, segments: &[&str]) -> String {
    let base = base_url.trim_end_matches('/');
    if segments.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, segments.join("/"))
}

/// Build the canonical absolute URL for a path.
///
/// The root maps to `base_url + "/"`, everything else to `base_url` followed by
/// the normalized path, so the canonical always equals `base_url + normalize_path(path)`.
pub fn canonical_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), normalize_path(path))
}

/// Whether `value` is a relative site path rather than an absolute URL.
pub fn is_site_relative(value: &str) -> bool {
    !(value.starts_with("http://") || value.starts_with("https://") || value.starts_with("//"))
}

/// Resolve a possibly site-relative asset reference against the base URL.
pub fn absolutize(base_url: &str, value: &str) -> String {
    if is_site_relative(value) {
        canonical_url(base_url, value)
    } else {
        value.to_string()
    }
}

fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}
