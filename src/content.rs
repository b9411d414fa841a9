//! Blog post discovery.
//!
//! The metadata subsystem only needs two facts about each post: its id (the
//! URL slug under the blog prefix) and its publication date. The
//! [`ContentStore`] trait is the seam to whatever owns the posts; the sitemap
//! builder is the only consumer.
//!
//! [`PostsDirectory`] is the filesystem implementation. It walks a directory
//! for markdown files with TOML front matter:
//!
//! ```text
//! posts/
//! ├── svg-in-css.md
//! └── 2024/
//!     └── json-tips.md
//! ```
//!
//! ```markdown
//! +++
//! date = "2024-06-01"
//! slug = "json-formatting-tips"   # optional, defaults to the file stem
//! draft = false                   # optional, drafts are skipped
//! +++
//!
//! # Ten JSON formatting tips
//! ```
//!
//! Posts are returned sorted by id so the snapshot is order-stable regardless
//! of directory iteration order.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot read posts directory {0}: {1}")]
    Walk(PathBuf, walkdir::Error),
    #[error("Posts directory not found: {0}")]
    MissingDir(PathBuf),
    #[error("Front matter error in {0}: {1}")]
    FrontMatter(PathBuf, String),
}

/// Minimal shape of a blog post as seen by the sitemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostSummary {
    pub id: String,
    /// ISO-8601 date or date-time, as written by the author.
    pub date: String,
}

/// Source of the complete post collection.
pub trait ContentStore {
    fn all_posts(&self) -> Result<Vec<BlogPostSummary>, ContentError>;
}

impl ContentStore for Vec<BlogPostSummary> {
    fn all_posts(&self) -> Result<Vec<BlogPostSummary>, ContentError> {
        Ok(self.clone())
    }
}

/// Parse an ISO-8601 date (`2024-06-01`), a local date-time
/// (`2024-06-01T09:30:00`) or an RFC 3339 date-time
/// (`2024-06-01T09:30:00+02:00`) into UTC.
///
/// Plain dates map to midnight UTC. Local date-times, as written by an
/// unquoted TOML `date = 2024-06-01T09:30:00`, are taken as UTC.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

// ============================================================================
// Filesystem store
// ============================================================================

/// Markdown posts with `+++` TOML front matter under a directory.
#[derive(Debug, Clone)]
pub struct PostsDirectory {
    root: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FrontMatter {
    date: Option<toml::Value>,
    slug: Option<String>,
    id: Option<String>,
    draft: bool,
}

impl PostsDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_post(&self, path: &Path) -> Result<Option<BlogPostSummary>, ContentError> {
        let text = fs::read_to_string(path)?;
        let front = parse_front_matter(&text)
            .map_err(|e| ContentError::FrontMatter(path.to_path_buf(), e))?;
        if front.draft {
            tracing::debug!(path = %path.display(), "skipping draft post");
            return Ok(None);
        }
        let id = front
            .slug
            .or(front.id)
            .or_else(|| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .map(|id| id.trim_matches('/').to_string())
            .unwrap_or_default();
        if id.is_empty() {
            tracing::warn!(path = %path.display(), "post has no usable id, skipping");
            return Ok(None);
        }
        let date = match front.date {
            // TOML datetimes stay typed; quoted dates arrive as strings.
            Some(toml::Value::Datetime(dt)) => dt.to_string(),
            Some(toml::Value::String(s)) => s,
            Some(other) => {
                return Err(ContentError::FrontMatter(
                    path.to_path_buf(),
                    format!("date must be a string or datetime, got {other}"),
                ));
            }
            None => {
                return Err(ContentError::FrontMatter(
                    path.to_path_buf(),
                    "missing date".to_string(),
                ));
            }
        };
        Ok(Some(BlogPostSummary { id, date }))
    }
}

impl ContentStore for PostsDirectory {
    /// Every non-draft post, sorted by id.
    ///
    /// A missing or unreadable directory is an error. A single post with
    /// broken front matter is skipped with a warning rather than failing the
    /// whole collection. Duplicate ids keep the first file in path order.
    fn all_posts(&self) -> Result<Vec<BlogPostSummary>, ContentError> {
        if !self.root.is_dir() {
            return Err(ContentError::MissingDir(self.root.clone()));
        }
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry.map_err(|e| ContentError::Walk(self.root.clone(), e))?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|e| e == "md") {
                files.push(path.to_path_buf());
            }
        }
        files.sort();

        let mut seen = HashSet::new();
        let mut posts = Vec::new();
        for path in files {
            match self.read_post(&path) {
                Ok(Some(post)) => {
                    if seen.insert(post.id.clone()) {
                        posts.push(post);
                    } else {
                        tracing::warn!(id = %post.id, path = %path.display(), "duplicate post id, skipping");
                    }
                }
                Ok(None) => {}
                Err(e) => tracing::warn!(error = %e, "skipping unreadable post"),
            }
        }
        posts.sort_by(|a, b| a.id.cmp(&b.id));
        tracing::debug!(count = posts.len(), root = %self.root.display(), "loaded posts");
        Ok(posts)
    }
}

/// Extract the `+++`-delimited TOML front matter block.
///
/// A file without front matter yields an empty [`FrontMatter`]. Delimiters
/// are matched per line, so `\n` and `\r\n` endings both work.
fn parse_front_matter(text: &str) -> Result<FrontMatter, String> {
    let mut lines = text.trim_start_matches('\u{feff}').lines();
    if lines.next().map(str::trim_end) != Some("+++") {
        return Ok(FrontMatter::default());
    }
    let mut block = String::new();
    for line in lines {
        if line.trim_end() == "+++" {
            return toml::from_str(&block).map_err(|e| e.to_string());
        }
        block.push_str(line);
        block.push('\n');
    }
    Err("unterminated +++ front matter".to_string())
}
