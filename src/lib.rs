//! # Konverter Meta
//!
//! Metadata and navigation layer for the Konverter developer-tools site. Given
//! a route path it derives everything search engines and navigation need:
//!
//! ```text
//! "/json-formatter"
//!   ├─ seo::resolve            → title, description, canonical, OG/Twitter tags
//!   ├─ schema::emit            → JSON-LD (application, review, breadcrumb)
//!   ├─ breadcrumb::ui_trail    → Home › JSON Formatter
//!   └─ head::render_head       → the <head> fragment combining all of the above
//!
//! build time
//!   └─ sitemap::build_sitemap  → static routes + blog posts, ordered
//! ```
//!
//! These outputs are computed by independent entry points but must agree with
//! each other: the same labels, the same canonical base URL, the same
//! priorities. That agreement comes from one place, the [`site::Site`] value
//! loaded at startup: a validated [`config::SiteConfig`] plus the
//! [`labels::RouteLabels`] registry built from it. Every entry point takes it
//! by shared reference and nothing mutates it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation |
//! | [`site`] | The loaded, immutable site (config + label registry) |
//! | [`labels`] | Route label registry: path segment → display label |
//! | [`route`] | Path normalization, canonical URL construction |
//! | [`seo`] | Per-route metadata bundle with site-wide fallbacks |
//! | [`schema`] | JSON-LD emitters and script-safe serialization |
//! | [`breadcrumb`] | Breadcrumb derivation (schema + UI variants) and rendering |
//! | [`content`] | Blog post discovery behind the `ContentStore` trait |
//! | [`sitemap`] | Sitemap merge, ordering, XML and robots.txt rendering |
//! | [`head`] | `<head>` tag rendering with Maud |
//! | [`webmanifest`] | Web app manifest JSON |
//! | [`output`] | CLI output formatting |
//!
//! # Failure Model
//!
//! Derivation never fails. Unknown routes fall back to site defaults,
//! unregistered segments to their capitalized form, malformed paths are
//! normalized, and an unavailable content store shrinks the sitemap to its
//! static routes with a logged warning. Errors only surface at the edges:
//! loading configuration and writing files.

pub mod breadcrumb;
pub mod config;
pub mod content;
pub mod head;
pub mod labels;
pub mod output;
pub mod route;
pub mod schema;
pub mod seo;
pub mod site;
pub mod sitemap;
pub mod webmanifest;

#[cfg(test)]
pub(crate) mod test_helpers;
