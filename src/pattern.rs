//! Path patterns and template-page selection.
//!
//! A pattern is a path template with at most one `:num` placeholder, e.g.
//! `/blog/:num/` or `/tag/ruby/:num/`. This module answers three questions
//! about a pattern:
//!
//! - Where does page N land? (`:num` substitution, page 1 special-cased to
//!   the template page's registered URL)
//! - Which group of posts does it paginate? (the literal segment preceding
//!   the placeholder, if any)
//! - Which registered index page is its template? (longest directory-
//!   hierarchy match among `index.html` candidates)
//!
//! The hierarchy walk compares the pattern's directory and each of its
//! ancestors against a candidate's directory, stopping at the source root.
//! An index page therefore qualifies when it sits at or above the pattern's
//! directory inside the site, and the deepest qualifying index wins.

use std::path::{Path, PathBuf};

use crate::types::SitePage;

/// Canonical index filename. Only pages with this name can serve as a
/// pattern's template.
pub const INDEX_FILE: &str = "index.html";

/// Page-number placeholder token inside patterns.
pub const NUM_TOKEN: &str = ":num";

/// Return `path` with exactly one leading slash. Idempotent.
pub fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Return `path` without its leading slash, if any.
pub fn strip_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Grouping name of a pattern: the last literal segment before the `:num`
/// placeholder, or `None` for the generic (ungrouped) pattern.
///
/// - `/:num/` → `None` (paginates all visible posts)
/// - `/category/:num/` → `Some("category")`
/// - `/tag/ruby/:num/` → `Some("ruby")` (the deepest literal wins)
pub fn group_name(pattern: &str) -> Option<&str> {
    let segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let cut = segments
        .iter()
        .position(|s| s.contains(NUM_TOKEN))
        .unwrap_or(segments.len());
    segments[..cut].last().copied()
}

/// Whether `dir` lies on the ancestor chain of `pattern_dir`, bounded by the
/// site source.
///
/// Walks `pattern_dir` upward one component at a time, returning true as
/// soon as it equals `dir`. The walk stops (false) when it would leave the
/// filesystem (`parent` is a fixed point or absent) or when it reaches the
/// source root's parent, i.e. it never escapes the site.
pub fn in_hierarchy(source: &Path, dir: &Path, pattern_dir: &Path) -> bool {
    let mut current = pattern_dir;
    loop {
        let Some(parent) = current.parent() else {
            return false;
        };
        if parent == current {
            return false;
        }
        if source.parent() == Some(current) {
            return false;
        }
        if dir == current {
            return true;
        }
        current = parent;
    }
}

/// Absolute directory a pattern paginates under: the pattern joined to the
/// source root, with the placeholder/filename segment stripped.
fn pattern_dir(source: &Path, pattern: &str) -> PathBuf {
    let absolute = source.join(strip_leading_slash(pattern));
    match absolute.parent() {
        Some(parent) => parent.to_path_buf(),
        None => absolute,
    }
}

/// Whether `page` can serve as the template for `pattern`: it must be named
/// `index.html` and live at or above the pattern's directory.
pub fn is_pagination_candidate(source: &Path, pattern: &str, page: &SitePage) -> bool {
    if page.name != INDEX_FILE {
        return false;
    }
    let file = source.join(strip_leading_slash(&page.path()));
    let dir = match file.parent() {
        Some(parent) => parent.to_path_buf(),
        None => file,
    };
    in_hierarchy(source, &dir, &pattern_dir(source, pattern))
}

/// Find the page that acts as the pattern's template: the qualifying
/// candidate with the longest raw path. Ties keep the first-registered page,
/// so selection is deterministic for a given collection.
///
/// Returns an index into `pages`, or `None` when no index page qualifies.
pub fn template_page(pages: &[SitePage], source: &Path, pattern: &str) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (idx, page) in pages.iter().enumerate() {
        if !is_pagination_candidate(source, pattern, page) {
            continue;
        }
        let len = page.path().len();
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((idx, len));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Path lookups for one pattern, bound to the current page collection.
///
/// Pagers resolve their previous/next/first paths through this so that
/// page 1 always points at the template page's registered URL while later
/// pages get synthesized `:num` paths.
pub struct PatternPaths<'a> {
    pattern: &'a str,
    source: &'a Path,
    pages: &'a [SitePage],
}

impl<'a> PatternPaths<'a> {
    pub fn new(pattern: &'a str, source: &'a Path, pages: &'a [SitePage]) -> Self {
        PatternPaths {
            pattern,
            source,
            pages,
        }
    }

    /// Output path for page `num`.
    ///
    /// `None` in means no such page (and `None` out). Page numbers at or
    /// below 1 resolve to the registered first-page URL; higher numbers get
    /// the pattern with `:num` substituted and a leading slash ensured.
    pub fn resolve(&self, num: Option<usize>) -> Option<String> {
        let num = num?;
        if num <= 1 {
            return self.first_page_url();
        }
        let path = self.pattern.replacen(NUM_TOKEN, &num.to_string(), 1);
        Some(ensure_leading_slash(&path))
    }

    /// URL of whichever page currently serves as page 1 for this pattern.
    ///
    /// A lookup against the registered pages, not a synthesized path: page 1
    /// reuses an existing index page, wherever that happens to live.
    pub fn first_page_url(&self) -> Option<String> {
        template_page(self.pages, self.source, self.pattern).map(|idx| self.pages[idx].url())
    }

    /// The pattern's base directory (placeholder segment stripped), with a
    /// leading slash.
    pub fn base_dir(&self) -> String {
        let dir = Path::new(self.pattern)
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        ensure_leading_slash(&dir)
    }
}
