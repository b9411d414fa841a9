//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Breadcrumbs
//!
//! ```text
//! 001 Home → https://www.konverter-online.com
//! 002 Blog → https://www.konverter-online.com/blog
//! 003 My-post (current) → https://www.konverter-online.com/blog/my-post
//! ```
//!
//! ## Sitemap
//!
//! ```text
//! 1.0 weekly   https://www.konverter-online.com/
//! 0.9 monthly  https://www.konverter-online.com/color-generator
//! ...
//! 11 URLs (9 static, 2 posts)
//! ```
//!
//! ## Check
//!
//! ```text
//! Site
//!     https://www.konverter-online.com
//!     Labels: 8
//!     Pages: 9
//!     Sitemap routes: 9
//! ```

use crate::breadcrumb::Crumb;
use crate::seo::SeoConfig;
use crate::site::Site;
use crate::sitemap::SitemapEntry;
use std::path::PathBuf;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// Breadcrumbs
// ============================================================================

pub fn format_breadcrumb_output(trail: &[Crumb]) -> Vec<String> {
    if trail.is_empty() {
        return vec!["(no breadcrumbs for the home page)".to_string()];
    }
    trail
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let marker = if c.current { " (current)" } else { "" };
            format!("{} {}{} → {}", format_index(i + 1), c.label, marker, c.url)
        })
        .collect()
}

pub fn print_breadcrumb_output(trail: &[Crumb]) {
    for line in format_breadcrumb_output(trail) {
        println!("{}", line);
    }
}

// ============================================================================
// SEO
// ============================================================================

pub fn format_seo_output(seo: &SeoConfig) -> Vec<String> {
    let kinds: Vec<&str> = seo.structured_data.iter().map(|k| k.as_str()).collect();
    vec![
        seo.title.clone(),
        format!("{}Canonical: {}", indent(1), seo.canonical),
        format!("{}Description: {}", indent(1), seo.description),
        format!("{}Keywords: {}", indent(1), seo.keywords.join(", ")),
        format!("{}Image: {}", indent(1), seo.og_image),
        format!("{}Structured data: {}", indent(1), kinds.join(", ")),
    ]
}

pub fn print_seo_output(seo: &SeoConfig) {
    for line in format_seo_output(seo) {
        println!("{}", line);
    }
}

// ============================================================================
// Sitemap
// ============================================================================

/// One line per entry plus a summary line.
///
/// `post_count` is how many of the entries came from the content store.
pub fn format_sitemap_output(entries: &[SitemapEntry], post_count: usize) -> Vec<String> {
    let mut lines: Vec<String> = entries
        .iter()
        .map(|e| {
            format!(
                "{:.1} {:<8} {}",
                e.priority,
                e.change_frequency.as_str(),
                e.url
            )
        })
        .collect();
    lines.push(format!(
        "{} URLs ({} static, {} posts)",
        entries.len(),
        entries.len().saturating_sub(post_count),
        post_count
    ));
    lines
}

pub fn print_sitemap_output(entries: &[SitemapEntry], post_count: usize) {
    for line in format_sitemap_output(entries, post_count) {
        println!("{}", line);
    }
}

// ============================================================================
// Check / build
// ============================================================================

pub fn format_check_output(site: &Site) -> Vec<String> {
    let config = &site.config;
    vec![
        "Site".to_string(),
        format!("{}{}", indent(1), config.base_url),
        format!("{}Labels: {}", indent(1), site.labels.len()),
        format!("{}Pages: {}", indent(1), config.pages.len()),
        format!("{}Sitemap routes: {}", indent(1), config.sitemap.routes.len()),
        format!("{}Reviews: {}", indent(1), config.reviews.items.len()),
    ]
}

pub fn print_check_output(site: &Site) {
    for line in format_check_output(site) {
        println!("{}", line);
    }
}

pub fn format_build_output(written: &[PathBuf]) -> Vec<String> {
    let mut lines: Vec<String> = written
        .iter()
        .map(|p| format!("{}{}", indent(1), p.display()))
        .collect();
    lines.insert(0, "Wrote".to_string());
    lines.push(format!("{} files", written.len()));
    lines
}

pub fn print_build_output(written: &[PathBuf]) {
    for line in format_build_output(written) {
        println!("{}", line);
    }
}
