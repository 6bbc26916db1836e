//! Entity types exchanged with the surrounding generator pipeline.
//!
//! Posts and pages are owned by the external content pipeline; pagination
//! only reads posts and mutates pages (attaching pagers, appending generated
//! pages, assigning output directories). `SiteConfig` is the already-loaded
//! slice of site configuration that pagination consumes.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pager::Pager;
use crate::pattern;

/// A content item being paginated (a post or entry).
///
/// Posts arrive in source order and keep that order across pages: page 1
/// holds the first `per_page` posts, and so on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    /// Category labels, used to group posts under named patterns.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Tag labels, matched the same way as categories.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Hidden posts are excluded from every paginated series.
    #[serde(default)]
    pub hidden: bool,
}

impl Post {
    pub fn new(title: impl Into<String>) -> Self {
        Post {
            title: title.into(),
            categories: Vec::new(),
            tags: Vec::new(),
            hidden: false,
        }
    }
}

/// The pagination-relevant slice of site configuration.
///
/// Loading and validating configuration is the caller's job; `per_page` is
/// assumed to be at least 1 by the time it reaches this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path of the site source root.
    pub source: PathBuf,
    /// Posts per page.
    pub per_page: usize,
    /// Path patterns to paginate, processed in this order.
    pub paginate_paths: Vec<String>,
}

/// A page registered with the site.
///
/// Pages live in a flat collection owned by the caller. The pagination pass
/// mutates them in two ways: the chosen template page gets a pager attached
/// in place, and generated pages (cloned from the template) are appended
/// with an output directory of their own.
#[derive(Debug, Clone, Serialize)]
pub struct SitePage {
    /// Site source root the page was read from.
    pub source: PathBuf,
    /// Containing directory relative to the source root, with a leading
    /// slash (`/`, `/blog`, ...). This is where the source file lives.
    pub dir: String,
    /// Filename, e.g. `index.html`.
    pub name: String,
    /// Output directory override. When set, the page is written (and its URL
    /// resolved) here instead of at `dir`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    /// Page title. Generated pages of a named group carry the group name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Pagination state, attached during the generation pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pager: Option<Pager>,
}

impl SitePage {
    pub fn new(
        source: impl Into<PathBuf>,
        dir: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        SitePage {
            source: source.into(),
            dir: dir.into(),
            name: name.into(),
            out_dir: None,
            title: None,
            pager: None,
        }
    }

    /// Source-relative file path, e.g. `blog/index.html`.
    ///
    /// Used for template candidate matching and for the longest-path
    /// tie-break, so it always reflects the source location, never the
    /// output override.
    pub fn path(&self) -> String {
        let dir = pattern::strip_leading_slash(&self.dir);
        let dir = dir.trim_end_matches('/');
        if dir.is_empty() {
            self.name.clone()
        } else {
            format!("{dir}/{}", self.name)
        }
    }

    /// Resolved URL of the page at its destination.
    ///
    /// Index pages resolve to their directory URL with a trailing slash
    /// (`/blog/` rather than `/blog/index.html`).
    pub fn url(&self) -> String {
        let dir = self.out_dir.as_deref().unwrap_or(&self.dir);
        let dir = pattern::ensure_leading_slash(dir);
        if self.name == pattern::INDEX_FILE {
            if dir.ends_with('/') {
                dir
            } else {
                format!("{dir}/")
            }
        } else if dir.ends_with('/') {
            format!("{dir}{}", self.name)
        } else {
            format!("{dir}/{}", self.name)
        }
    }
}
