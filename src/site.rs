//! The loaded site: validated configuration plus the route label registry
//! built from it.
//!
//! A [`Site`] is created once at startup and handed by reference to every
//! entry point (SEO resolution, breadcrumbs, structured data, sitemap). It is
//! never mutated afterwards.

use crate::config::{self, ConfigError, SiteConfig};
use crate::content;
use crate::labels::RouteLabels;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub labels: RouteLabels,
}

impl Site {
    /// Validate `config` and build the label registry from it.
    pub fn new(config: SiteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let labels = RouteLabels::new(config.labels.clone());
        Ok(Self { config, labels })
    }

    /// Load `config.toml` from `dir` on top of the stock defaults.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        Self::new(config::load_config(dir)?)
    }

    /// `dateModified` for the application schema: the configured date, or
    /// `today` when none is set.
    pub fn date_modified(&self, today: NaiveDate) -> NaiveDate {
        self.config
            .date_modified
            .as_deref()
            .and_then(content::parse_date)
            .map(|dt| dt.date_naive())
            .unwrap_or(today)
    }

    /// Posts directory resolved against the site directory.
    pub fn posts_dir(&self, site_dir: &Path) -> PathBuf {
        site_dir.join(&self.config.content.posts_dir)
    }
}
