//! # Pagebound
//!
//! Pagination metadata and output-path placement for static site generators.
//! Given an ordered post list and a per-page size, pagebound partitions the
//! posts into pages, picks an existing index page to serve as each page
//! series' template, and computes every page's output directory plus its
//! previous/next/first navigation paths.
//!
//! # Architecture: Two Components
//!
//! ```text
//! 1. Paginate   patterns + posts + pages  →  mutated page collection
//! 2. Pager      (pattern, page number)    →  slice + navigation record
//! ```
//!
//! The [`paginate`] pass walks the configured path patterns in order. For
//! each pattern it finds the best-matching `index.html` already registered
//! in the site (the *template page*), filters the posts that belong to the
//! pattern's group, and attaches one [`pager::Pager`] per page number. Page 1
//! reuses the template page in place; later pages are cloned from it and
//! appended to the collection with a computed output directory.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Entity types exchanged with the surrounding pipeline (`Post`, `SitePage`, `SiteConfig`) |
//! | [`pager`] | Per-page slice and navigation metadata, page-count math |
//! | [`pattern`] | Path patterns: `:num` substitution, directory-hierarchy matching, template selection |
//! | [`paginate`] | The generation pass over all configured patterns |
//!
//! # Design Decisions
//!
//! ## Template Reuse Over Template Synthesis
//!
//! Page 1 of a series is never written to a fresh location. Whichever
//! registered index page best matches the pattern keeps serving its original
//! URL and simply gains pagination state. Later pages link back to it through
//! [`pattern::PatternPaths::resolve`], which looks the URL up against the
//! live page collection rather than synthesizing a path. This keeps page 1
//! stable for permalinks and feeds regardless of how the pattern is spelled.
//!
//! ## Longest-Hierarchy Template Matching
//!
//! A pattern like `/tag/ruby/:num/` should be rendered by the most specific
//! index available: `/tag/ruby/index.html` if it exists, falling back through
//! `/tag/index.html` up to the site root index. Candidates are the index
//! pages whose directory is an ancestor of (or equal to) the pattern's
//! directory, and the longest path wins. Ties keep the first-registered page
//! so selection is deterministic.
//!
//! ## An Explicit Page Arena
//!
//! The site's page collection is passed in as a plain `Vec<SitePage>` and
//! mutated in place — no global site object. Template lookups return stable
//! indices into it, and the pass appends generated pages as it goes. Pattern
//! order is observable: a page generated for an earlier pattern can become a
//! later pattern's template when their directories overlap, and downstream
//! configurations rely on that.
//!
//! # Out of Scope
//!
//! Configuration loading, markup rendering, and all file I/O belong to the
//! surrounding generator. Pagebound only reads posts and mutates the page
//! collection; rendering the resulting pages is the caller's job.

pub mod paginate;
pub mod pager;
pub mod pattern;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
