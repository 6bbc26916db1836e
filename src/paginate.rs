//! The pagination pass over all configured path patterns.
//!
//! For each pattern in `SiteConfig::paginate_paths`, in configured order:
//!
//! 1. Find the template page (the deepest registered `index.html` at or
//!    above the pattern's directory). No template means the pattern is
//!    skipped with a warning, never a failure.
//! 2. Filter the posts that belong to the pattern: the generic pattern
//!    takes every visible post, a named pattern takes visible posts whose
//!    categories or tags carry the group name.
//! 3. Attach a pager per page number. Page 1 reuses the template page in
//!    place; later pages are cloned from it, given the group name as their
//!    title, pointed at a computed output directory, and appended to the
//!    page collection.
//!
//! Patterns see the pages appended by earlier patterns. When pattern
//! directories overlap, an earlier pattern's generated page can become a
//! later pattern's template; configured order decides, on purpose.

use log::{debug, warn};

use crate::pager::{self, Pager, PagerError};
use crate::pattern::{self, PatternPaths};
use crate::types::{Post, SiteConfig, SitePage};

/// Whether the site has anything to paginate: a page size and at least one
/// registered page.
pub fn pagination_enabled(config: &SiteConfig, pages: &[SitePage]) -> bool {
    config.per_page >= 1 && !pages.is_empty()
}

/// Run the pagination pass, mutating `pages` in place.
///
/// Fails only on [`PagerError::OutOfRange`], which indicates a bug in this
/// loop rather than bad input. Missing templates are logged and skipped.
pub fn generate(
    config: &SiteConfig,
    posts: &[Post],
    pages: &mut Vec<SitePage>,
) -> Result<(), PagerError> {
    if !pagination_enabled(config, pages) {
        return Ok(());
    }
    for path in &config.paginate_paths {
        let Some(template) = pattern::template_page(pages, &config.source, path) else {
            warn!(
                "no {} page found to use as the pagination template for {path}; \
                 skipping pagination",
                pattern::INDEX_FILE
            );
            continue;
        };
        paginate(config, path, template, posts, pages)?;
    }
    Ok(())
}

/// Posts belonging to one pattern, in source order.
///
/// Hidden posts are excluded from every series. Named patterns additionally
/// require the group name among the post's categories or tags.
fn group_posts(posts: &[Post], name: Option<&str>) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| !post.hidden)
        .filter(|post| match name {
            None => true,
            Some(name) => {
                post.categories.iter().any(|c| c == name) || post.tags.iter().any(|t| t == name)
            }
        })
        .cloned()
        .collect()
}

/// Paginate one pattern against its template page.
fn paginate(
    config: &SiteConfig,
    path: &str,
    template: usize,
    posts: &[Post],
    pages: &mut Vec<SitePage>,
) -> Result<(), PagerError> {
    let name = pattern::group_name(path);
    let group = group_posts(posts, name);
    let total_pages = pager::calculate_pages(&group, config.per_page);
    debug!(
        "paginating {path}: {} posts over {total_pages} pages",
        group.len()
    );

    for num in 1..=total_pages {
        let paths = PatternPaths::new(path, &config.source, pages);
        let pager = Pager::new(num, &group, config.per_page, Some(total_pages), &paths)?;
        let out_dir = if num > 1 {
            paths.resolve(Some(num))
        } else {
            Some(paths.base_dir())
        };

        if pages[template].pager.is_none() {
            // The template page itself becomes page 1, at its own URL.
            pages[template].pager = Some(pager);
        } else {
            let tpl = &pages[template];
            let mut page = SitePage::new(tpl.source.clone(), tpl.dir.clone(), tpl.name.clone());
            page.title = name.map(str::to_string).or_else(|| tpl.title.clone());
            page.pager = Some(pager);
            page.out_dir = out_dir;
            pages.push(page);
        }
    }
    Ok(())
}
