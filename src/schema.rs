//! JSON-LD structured data emitters.
//!
//! Three independent, pure builders produce schema.org objects:
//!
//! | Kind | `@type` | Source |
//! |------|---------|--------|
//! | [`SchemaKind::Application`] | `WebApplication` | `[application]` config record |
//! | [`SchemaKind::Review`] | `SoftwareApplication` with `aggregateRating` + `review[]` | `[reviews]` config record |
//! | [`SchemaKind::Breadcrumb`] | `BreadcrumbList` | breadcrumb trail of the route |
//!
//! Every object carries `@context: "https://schema.org"` and a non-empty
//! `@type`. [`script_body`] serializes an object for embedding inside a
//! `<script type="application/ld+json">` element.
//!
//! The review schema's `reviewCount` is always computed from the review list
//! it is emitted alongside. A separately maintained historical total goes to
//! `ratingCount` instead, so the two can never silently drift apart.

use crate::breadcrumb::{self, Crumb};
use crate::config::{ApplicationConfig, ReviewsConfig};
use crate::site::Site;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Which JSON-LD payloads a page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Application,
    Review,
    Breadcrumb,
}

impl SchemaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaKind::Application => "application",
            SchemaKind::Review => "review",
            SchemaKind::Breadcrumb => "breadcrumb",
        }
    }
}

/// `WebApplication` schema describing the tool collection.
pub fn application_schema(
    app: &ApplicationConfig,
    base_url: &str,
    date_modified: NaiveDate,
) -> Value {
    let mut author = json!({
        "@type": "Organization",
        "name": app.author_name,
    });
    if let Some(url) = &app.author_url {
        author["url"] = json!(url);
    }
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebApplication",
        "name": app.name,
        "description": app.description,
        "url": app.url.as_deref().unwrap_or(base_url),
        "applicationCategory": app.application_category,
        "operatingSystem": app.operating_system,
        "browserRequirements": app.browser_requirements,
        "featureList": app.features,
        "offers": {
            "@type": "Offer",
            "price": app.price,
            "priceCurrency": app.price_currency,
        },
        "author": author,
        "dateModified": date_modified.format("%Y-%m-%d").to_string(),
    })
}

/// `SoftwareApplication` schema with aggregate rating and literal reviews.
///
/// `ratingValue` is the configured value, or the mean of the reviews rounded
/// to one decimal. The aggregate is only emitted when something is counted:
/// at least one listed review, or a non-zero historical `rating_count`.
/// `reviewCount` is omitted when no reviews are listed.
pub fn review_schema(reviews: &ReviewsConfig, item_name: &str) -> Value {
    let items: Vec<Value> = reviews
        .items
        .iter()
        .map(|r| {
            json!({
                "@type": "Review",
                "author": { "@type": "Person", "name": r.author },
                "datePublished": r.date_published,
                "reviewBody": r.body,
                "reviewRating": {
                    "@type": "Rating",
                    "ratingValue": r.rating,
                    "bestRating": reviews.best_rating,
                    "worstRating": reviews.worst_rating,
                },
            })
        })
        .collect();

    let mut schema = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "SoftwareApplication",
        "name": reviews.item_name.as_deref().unwrap_or(item_name),
        "applicationCategory": "DeveloperApplication",
        "review": items,
    });

    if let Some(value) = aggregate_rating_value(reviews) {
        let mut aggregate = json!({
            "@type": "AggregateRating",
            "ratingValue": value,
            "bestRating": reviews.best_rating,
            "worstRating": reviews.worst_rating,
        });
        if !reviews.items.is_empty() {
            aggregate["reviewCount"] = json!(reviews.items.len());
        }
        if let Some(count) = reviews.rating_count {
            aggregate["ratingCount"] = json!(count);
        }
        schema["aggregateRating"] = aggregate;
    }
    schema
}

fn aggregate_rating_value(reviews: &ReviewsConfig) -> Option<f64> {
    if reviews.items.is_empty() && reviews.rating_count.unwrap_or(0) == 0 {
        return None;
    }
    if let Some(value) = reviews.rating_value {
        return Some(value);
    }
    if reviews.items.is_empty() {
        return None;
    }
    let sum: f64 = reviews.items.iter().map(|r| r.rating).sum();
    let mean = sum / reviews.items.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// `BreadcrumbList` schema from a breadcrumb trail.
///
/// Positions are 1-indexed in trail order.
pub fn breadcrumb_schema(trail: &[Crumb]) -> Value {
    let items: Vec<Value> = trail
        .iter()
        .enumerate()
        .map(|(idx, crumb)| {
            json!({
                "@type": "ListItem",
                "position": idx + 1,
                "name": crumb.label,
                "item": crumb.url,
            })
        })
        .collect();
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// Build one structured-data object for a route.
pub fn emit(site: &Site, kind: SchemaKind, path: &str, today: NaiveDate) -> Value {
    let config = &site.config;
    match kind {
        SchemaKind::Application => {
            application_schema(&config.application, &config.base_url, site.date_modified(today))
        }
        SchemaKind::Review => review_schema(&config.reviews, &config.application.name),
        SchemaKind::Breadcrumb => breadcrumb_schema(&breadcrumb::schema_trail(site, path)),
    }
}

/// Serialize a JSON-LD object for a `<script type="application/ld+json">` body.
///
/// `<`, `>` and `&` are emitted as `\u003c`, `\u003e` and `\u0026` so that a
/// `</script>` sequence inside a string value cannot close the element. The
/// result is still valid JSON and parses back to the same value.
pub fn script_body(value: &Value) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Review;
    use crate::test_helpers::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn assert_schema_header(value: &Value) {
        assert_eq!(value["@context"], SCHEMA_CONTEXT);
        let ty = value["@type"].as_str().expect("@type must be a string");
        assert!(!ty.is_empty());
    }

    // =========================================================================
    // Application schema
    // =========================================================================

    #[test]
    fn application_schema_has_context_and_type() {
        let app = ApplicationConfig::default();
        let value = application_schema(&app, BASE_URL, date());
        assert_schema_header(&value);
        assert_eq!(value["@type"], "WebApplication");
    }

    #[test]
    fn application_schema_is_free() {
        let value = application_schema(&ApplicationConfig::default(), BASE_URL, date());
        assert_eq!(value["offers"]["@type"], "Offer");
        assert_eq!(value["offers"]["price"], "0");
    }

    #[test]
    fn application_schema_date_modified() {
        let value = application_schema(&ApplicationConfig::default(), BASE_URL, date());
        assert_eq!(value["dateModified"], "2025-01-15");
    }

    #[test]
    fn application_schema_url_defaults_to_base() {
        let value = application_schema(&ApplicationConfig::default(), BASE_URL, date());
        assert_eq!(value["url"], BASE_URL);
    }

    #[test]
    fn application_schema_lists_features() {
        let app = ApplicationConfig::default();
        let value = application_schema(&app, BASE_URL, date());
        assert_eq!(
            value["featureList"].as_array().unwrap().len(),
            app.features.len()
        );
    }

    #[test]
    fn application_schema_author_url_only_when_set() {
        let mut app = ApplicationConfig::default();
        let value = application_schema(&app, BASE_URL, date());
        assert!(value["author"].get("url").is_none());

        app.author_url = Some("https://example.com".to_string());
        let value = application_schema(&app, BASE_URL, date());
        assert_eq!(value["author"]["url"], "https://example.com");
    }

    // =========================================================================
    // Review schema
    // =========================================================================

    #[test]
    fn review_count_matches_review_list() {
        let reviews = ReviewsConfig::default();
        let value = review_schema(&reviews, "Konverter Online");
        assert_schema_header(&value);
        let listed = value["review"].as_array().unwrap().len();
        assert_eq!(value["aggregateRating"]["reviewCount"], listed);
        assert_eq!(listed, reviews.items.len());
    }

    #[test]
    fn review_count_tracks_added_reviews() {
        let mut reviews = ReviewsConfig::default();
        reviews.items.push(Review {
            author: "Sam".to_string(),
            date_published: "2024-09-01".to_string(),
            body: "Handy.".to_string(),
            rating: 4.0,
        });
        let value = review_schema(&reviews, "Konverter Online");
        assert_eq!(value["aggregateRating"]["reviewCount"], 4);
        assert_eq!(value["review"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn historical_rating_count_is_separate() {
        let mut reviews = ReviewsConfig::default();
        reviews.rating_count = Some(128);
        let value = review_schema(&reviews, "Konverter Online");
        assert_eq!(value["aggregateRating"]["ratingCount"], 128);
        assert_eq!(value["aggregateRating"]["reviewCount"], 3);
    }

    #[test]
    fn rating_value_is_mean_when_unset() {
        // 5, 5, 4 → 4.666… → 4.7
        let value = review_schema(&ReviewsConfig::default(), "Konverter Online");
        assert_eq!(value["aggregateRating"]["ratingValue"], 4.7);
    }

    #[test]
    fn rating_value_uses_configured_value() {
        let mut reviews = ReviewsConfig::default();
        reviews.rating_value = Some(4.9);
        let value = review_schema(&reviews, "Konverter Online");
        assert_eq!(value["aggregateRating"]["ratingValue"], 4.9);
    }

    #[test]
    fn no_reviews_omits_aggregate() {
        let mut reviews = ReviewsConfig::default();
        reviews.items.clear();
        let value = review_schema(&reviews, "Konverter Online");
        assert!(value.get("aggregateRating").is_none());
        assert_schema_header(&value);
    }

    #[test]
    fn configured_rating_without_counts_omits_aggregate() {
        let mut reviews = ReviewsConfig::default();
        reviews.items.clear();
        reviews.rating_value = Some(4.8);
        let value = review_schema(&reviews, "Konverter Online");
        assert!(value.get("aggregateRating").is_none());

        reviews.rating_count = Some(0);
        let value = review_schema(&reviews, "Konverter Online");
        assert!(value.get("aggregateRating").is_none());
    }

    #[test]
    fn historical_count_alone_keeps_aggregate_without_review_count() {
        let mut reviews = ReviewsConfig::default();
        reviews.items.clear();
        reviews.rating_value = Some(4.8);
        reviews.rating_count = Some(57);
        let value = review_schema(&reviews, "Konverter Online");
        let aggregate = &value["aggregateRating"];
        assert_eq!(aggregate["ratingValue"], 4.8);
        assert_eq!(aggregate["ratingCount"], 57);
        assert!(aggregate.get("reviewCount").is_none());
    }

    #[test]
    fn reviews_keep_configured_order() {
        let reviews = ReviewsConfig::default();
        let value = review_schema(&reviews, "Konverter Online");
        let authors: Vec<&str> = value["review"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["author"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(authors, vec!["Lena M.", "Tobias K.", "Priya S."]);
    }

    // =========================================================================
    // Breadcrumb schema
    // =========================================================================

    #[test]
    fn breadcrumb_schema_positions_are_one_indexed() {
        let site = stock_site();
        let value = breadcrumb_schema(&breadcrumb::schema_trail(&site, "/blog/my-post"));
        assert_schema_header(&value);
        let items = value["itemListElement"].as_array().unwrap();
        let positions: Vec<u64> = items.iter().map(|i| i["position"].as_u64().unwrap()).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn breadcrumb_schema_maps_label_and_url() {
        let site = stock_site();
        let value = breadcrumb_schema(&breadcrumb::schema_trail(&site, "/blog/my-post"));
        let items = value["itemListElement"].as_array().unwrap();
        assert_eq!(items[0]["name"], "Home");
        assert_eq!(items[0]["item"], BASE_URL);
        assert_eq!(items[1]["name"], "Blog");
        assert_eq!(items[1]["item"], format!("{BASE_URL}/blog"));
        assert_eq!(items[2]["name"], "My-post");
        assert_eq!(items[2]["item"], format!("{BASE_URL}/blog/my-post"));
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    #[test]
    fn every_kind_emits_valid_json_with_header() {
        let site = stock_site();
        for kind in [SchemaKind::Application, SchemaKind::Review, SchemaKind::Breadcrumb] {
            let body = script_body(&emit(&site, kind, "/json-formatter", date()));
            let parsed: Value = serde_json::from_str(&body).unwrap();
            assert_schema_header(&parsed);
        }
    }

    #[test]
    fn script_body_escapes_closing_script_tag() {
        let value = json!({ "@context": SCHEMA_CONTEXT, "@type": "Thing", "name": "</script><b>&" });
        let body = script_body(&value);
        assert!(!body.contains("</script>"));
        assert!(!body.contains('<'));
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn schema_kind_names() {
        assert_eq!(SchemaKind::Application.as_str(), "application");
        assert_eq!(
            serde_json::to_string(&SchemaKind::Breadcrumb).unwrap(),
            "\"breadcrumb\""
        );
    }
}
