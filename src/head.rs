//! `<head>` rendering.
//!
//! Turns a resolved [`SeoConfig`] into the tags the page-rendering layer
//! injects into `<head>`: title, description, keywords, canonical link, Open
//! Graph and Twitter Card tags, theme color, manifest link and one JSON-LD
//! script per structured-data kind.
//!
//! Uses [maud](https://maud.lambda.xyz/) so every interpolated value is
//! escaped; only the JSON-LD bodies go through `PreEscaped`, after
//! [`schema::script_body`] has neutralized `<`, `>` and `&`.

use crate::schema::{self, SchemaKind};
use crate::seo::{self, SeoConfig};
use crate::site::Site;
use chrono::NaiveDate;
use maud::{Markup, PreEscaped, html};

/// Serialized JSON-LD bodies for every structured-data kind of `seo`.
pub fn structured_data(
    site: &Site,
    seo: &SeoConfig,
    path: &str,
    today: NaiveDate,
) -> Vec<(SchemaKind, String)> {
    seo.structured_data
        .iter()
        .map(|&kind| (kind, schema::script_body(&schema::emit(site, kind, path, today))))
        .collect()
}

/// Render the `<head>` fragment for `path`.
pub fn render_head(site: &Site, path: &str, today: NaiveDate) -> Markup {
    let seo = seo::resolve(site, path);
    let scripts = structured_data(site, &seo, path, today);
    render_seo(site, &seo, &scripts)
}

/// Render head tags from an already resolved config.
pub fn render_seo(site: &Site, seo: &SeoConfig, scripts: &[(SchemaKind, String)]) -> Markup {
    let config = &site.config;
    let keywords = seo.keywords.join(", ");
    html! {
        title { (seo.title) }
        meta name="description" content=(seo.description);
        @if !keywords.is_empty() {
            meta name="keywords" content=(keywords);
        }
        link rel="canonical" href=(seo.canonical);
        meta name="theme-color" content=(config.manifest.theme_color);
        link rel="manifest" href="/manifest.webmanifest";

        meta property="og:type" content="website";
        meta property="og:site_name" content=(config.site_name);
        meta property="og:url" content=(seo.canonical);
        meta property="og:title" content=(seo.og_title);
        meta property="og:description" content=(seo.og_description);
        meta property="og:image" content=(seo.og_image);
        meta property="og:image:alt" content=(seo.og_image_alt);

        meta name="twitter:card" content="summary_large_image";
        @if let Some(handle) = &config.twitter_handle {
            meta name="twitter:site" content=(handle);
        }
        meta name="twitter:title" content=(seo.twitter_title);
        meta name="twitter:description" content=(seo.twitter_description);
        meta name="twitter:image" content=(seo.og_image);

        @for (kind, body) in scripts {
            script type="application/ld+json" data-schema=(kind.as_str()) {
                (PreEscaped(body))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::test_helpers::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn head(path: &str) -> String {
        render_head(&stock_site(), path, today()).into_string()
    }

    #[test]
    fn head_contains_title_and_canonical() {
        let html = head("/json-formatter/");
        assert!(html.contains("<title>JSON Formatter &amp; Validator | Konverter Online</title>"));
        assert!(html.contains(
            r#"<link rel="canonical" href="https://www.konverter-online.com/json-formatter">"#
        ));
    }

    #[test]
    fn head_contains_open_graph_and_twitter() {
        let html = head("/svg-to-jsx");
        assert!(html.contains(r#"property="og:title""#));
        assert!(html.contains(r#"property="og:url" content="https://www.konverter-online.com/svg-to-jsx""#));
        assert!(html.contains(r#"content="https://www.konverter-online.com/og-image.png""#));
        assert!(html.contains(r#"name="twitter:card" content="summary_large_image""#));
    }

    #[test]
    fn head_includes_one_script_per_schema_kind() {
        let html = head("/json-formatter");
        assert_eq!(html.matches("application/ld+json").count(), 2);
        assert!(html.contains(r#"data-schema="application""#));
        assert!(html.contains(r#"data-schema="breadcrumb""#));
    }

    #[test]
    fn home_carries_application_and_review_schema() {
        let html = head("/");
        assert!(html.contains(r#"data-schema="review""#));
        assert!(html.contains("AggregateRating"));
    }

    #[test]
    fn page_without_structured_data_has_no_scripts() {
        let html = head("/privacy-policy");
        assert!(!html.contains("<script"));
    }

    #[test]
    fn twitter_site_only_when_configured() {
        assert!(!head("/").contains("twitter:site"));

        let mut config = SiteConfig::default();
        config.twitter_handle = Some("@konverter".to_string());
        let html = render_head(&site_with(config), "/", today()).into_string();
        assert!(html.contains(r#"name="twitter:site" content="@konverter""#));
    }

    #[test]
    fn structured_data_bodies_are_valid_json() {
        let site = stock_site();
        let seo = seo::resolve(&site, "/");
        for (_, body) in structured_data(&site, &seo, "/", today()) {
            let value: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(value["@context"], schema::SCHEMA_CONTEXT);
        }
    }

    #[test]
    fn values_are_escaped() {
        let mut config = SiteConfig::default();
        config.defaults.title = "A \"quoted\" <b>title</b>".to_string();
        let html = render_head(&site_with(config), "/unknown", today()).into_string();
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
    }
}
