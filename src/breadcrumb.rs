//! Breadcrumb derivation.
//!
//! One algorithm, two consumers:
//!
//! - [`schema_trail`] feeds the `BreadcrumbList` JSON-LD schema. No item is
//!   marked current, and the root path still yields the lone `Home` item.
//! - [`ui_trail`] feeds the rendered navigation. The last item is marked
//!   current, and the root path yields an empty trail so the home page shows
//!   no breadcrumbs at all.
//!
//! Both go through [`derive`], so labels and URLs can never differ between
//! the structured data and what the visitor sees:
//!
//! ```text
//! /blog/my-post
//!   Home     https://www.konverter-online.com
//!   Blog     https://www.konverter-online.com/blog
//!   My-post  https://www.konverter-online.com/blog/my-post   (current, UI only)
//! ```

use crate::labels::RouteLabels;
use crate::route;
use crate::site::Site;
use maud::{Markup, html};
use serde::Serialize;

pub const HOME_LABEL: &str = "Home";

/// A single breadcrumb item. Serializes as `{label, href, current}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Crumb {
    pub label: String,
    #[serde(rename = "href")]
    pub url: String,
    pub current: bool,
}

/// Split `path` into segments and resolve each one to a crumb.
///
/// The first item is always `Home` pointing at `base_url`. Each following item
/// links to the base URL joined with every segment up to and including its own.
pub fn derive(labels: &RouteLabels, base_url: &str, path: &str) -> Vec<Crumb> {
    let segments = route::segments(path);
    let mut trail = Vec::with_capacity(segments.len() + 1);
    trail.push(Crumb {
        label: HOME_LABEL.to_string(),
        url: route::join_url(base_url, &[]),
        current: false,
    });
    for (idx, segment) in segments.iter().enumerate() {
        trail.push(Crumb {
            label: labels.label_for(segment),
            url: route::join_url(base_url, &segments[..=idx]),
            current: false,
        });
    }
    trail
}

/// Trail for the breadcrumb JSON-LD schema.
pub fn schema_trail(site: &Site, path: &str) -> Vec<Crumb> {
    derive(&site.labels, &site.config.base_url, path)
}

/// Trail for the rendered breadcrumb navigation.
///
/// Empty for the root path.
pub fn ui_trail(site: &Site, path: &str) -> Vec<Crumb> {
    if route::segments(path).is_empty() {
        return Vec::new();
    }
    let mut trail = derive(&site.labels, &site.config.base_url, path);
    if let Some(last) = trail.last_mut() {
        last.current = true;
    }
    trail
}

/// Render a UI trail as an ordered list inside a `nav` landmark.
///
/// Renders nothing for an empty trail. The current item is a plain span with
/// `aria-current="page"`; every other item is a link.
pub fn render_breadcrumbs(trail: &[Crumb]) -> Markup {
    html! {
        @if !trail.is_empty() {
            nav.breadcrumb aria-label="Breadcrumb" {
                ol {
                    @for crumb in trail {
                        li {
                            @if crumb.current {
                                span aria-current="page" { (crumb.label) }
                            } @else {
                                a href=(crumb.url) { (crumb.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}
