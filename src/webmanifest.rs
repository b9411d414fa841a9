//! Web app manifest (`manifest.webmanifest`) generation from `[manifest]`.

use crate::config::ManifestConfig;
use serde_json::{Value, json};

pub fn web_manifest(manifest: &ManifestConfig) -> Value {
    json!({
        "name": manifest.name,
        "short_name": manifest.short_name,
        "description": manifest.description,
        "start_url": manifest.start_url,
        "display": manifest.display,
        "background_color": manifest.background_color,
        "theme_color": manifest.theme_color,
        "icons": manifest.icons,
    })
}
