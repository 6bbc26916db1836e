//! Per-page slice and navigation metadata.
//!
//! A [`Pager`] captures everything the templating layer needs to render one
//! page of a series: the post slice, the totals, and the resolved paths of
//! the neighboring pages. It is computed once per (pattern, page number)
//! pair, never mutated afterwards, and serializes to a flat record with
//! exactly the fields declared here.

use serde::Serialize;
use thiserror::Error;

use crate::pattern::PatternPaths;
use crate::types::Post;

#[derive(Error, Debug)]
pub enum PagerError {
    /// The orchestration loop asked for a page past the end of the series.
    /// This signals a driving-code bug and aborts generation.
    #[error("page number can't be greater than total pages: {page} > {total_pages}")]
    OutOfRange { page: usize, total_pages: usize },
}

/// Number of pages needed to hold `all_posts` at `per_page` posts each.
///
/// `per_page` must be at least 1 (validated upstream).
pub fn calculate_pages(all_posts: &[Post], per_page: usize) -> usize {
    all_posts.len().div_ceil(per_page)
}

/// Navigation and slice metadata for one page of a paginated series.
///
/// Field order is the serialization contract consumed by the templating
/// layer; `previous_page`/`next_page` are `None` at the series boundaries.
#[derive(Debug, Clone, Serialize)]
pub struct Pager {
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
    /// The posts on this page, in source order. The last page may be short.
    pub posts: Vec<Post>,
    pub total_posts: usize,
    pub total_pages: usize,
    pub previous_page: Option<usize>,
    pub previous_page_path: Option<String>,
    pub next_page: Option<usize>,
    pub next_page_path: Option<String>,
    /// Where page 1 of this series lives. Always the template page's
    /// registered URL, even while computing page 1 itself.
    pub first_page_path: Option<String>,
    /// The pattern's base directory, leading slash guaranteed.
    pub page_path: String,
}

impl Pager {
    /// Compute the pager for page `page` of `all_posts`.
    ///
    /// `num_pages` is the precomputed page total, or `None` to derive it
    /// from the post count. `paths` resolves page numbers to output paths
    /// for the active pattern. Fails with [`PagerError::OutOfRange`] when
    /// `page` exceeds the total.
    pub fn new(
        page: usize,
        all_posts: &[Post],
        per_page: usize,
        num_pages: Option<usize>,
        paths: &PatternPaths<'_>,
    ) -> Result<Self, PagerError> {
        debug_assert!(page >= 1, "page numbers are 1-based");
        let total_pages = num_pages.unwrap_or_else(|| calculate_pages(all_posts, per_page));
        if page > total_pages {
            return Err(PagerError::OutOfRange { page, total_pages });
        }

        // A caller-supplied total can exceed the derived one; keep the
        // slice bounds inside the post list either way.
        let start = ((page - 1) * per_page).min(all_posts.len());
        let end = (start + per_page).min(all_posts.len());

        let previous_page = (page != 1).then(|| page - 1);
        let next_page = (page != total_pages).then(|| page + 1);

        Ok(Pager {
            page,
            per_page,
            posts: all_posts[start..end].to_vec(),
            total_posts: all_posts.len(),
            total_pages,
            previous_page,
            previous_page_path: paths.resolve(previous_page),
            next_page,
            next_page_path: paths.resolve(next_page),
            first_page_path: paths.resolve(Some(1)),
            page_path: paths.base_dir(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{index_page, posts, titles};
    use std::path::Path;

    fn pager(page: usize, all_posts: &[Post], per_page: usize) -> Result<Pager, PagerError> {
        let pages = vec![index_page("/"), index_page("/blog")];
        let paths = PatternPaths::new("/blog/:num/", Path::new("/site"), &pages);
        Pager::new(page, all_posts, per_page, None, &paths)
    }

    #[test]
    fn page_counts_round_up() {
        assert_eq!(calculate_pages(&posts(0), 5), 0);
        assert_eq!(calculate_pages(&posts(1), 5), 1);
        assert_eq!(calculate_pages(&posts(5), 5), 1);
        assert_eq!(calculate_pages(&posts(6), 5), 2);
        assert_eq!(calculate_pages(&posts(25), 10), 3);
    }

    #[test]
    fn twenty_five_posts_split_ten_per_page() {
        let all = posts(25);

        let one = pager(1, &all, 10).unwrap();
        assert_eq!(one.total_pages, 3);
        assert_eq!(one.total_posts, 25);
        assert_eq!(titles(&one.posts), titles(&all[0..10]));

        let two = pager(2, &all, 10).unwrap();
        assert_eq!(titles(&two.posts), titles(&all[10..20]));

        let three = pager(3, &all, 10).unwrap();
        assert_eq!(three.posts.len(), 5);
        assert_eq!(titles(&three.posts), titles(&all[20..25]));
    }

    #[test]
    fn slices_partition_the_posts_in_order() {
        let all = posts(13);
        let total = calculate_pages(&all, 5);
        let pagers: Vec<Pager> = (1..=total)
            .map(|page| pager(page, &all, 5).unwrap())
            .collect();
        let mut seen = Vec::new();
        for p in &pagers {
            seen.extend(titles(&p.posts));
        }
        assert_eq!(seen, titles(&all));
    }

    #[test]
    fn first_page_has_no_previous() {
        let all = posts(25);
        let one = pager(1, &all, 10).unwrap();
        assert_eq!(one.previous_page, None);
        assert_eq!(one.previous_page_path, None);
        assert_eq!(one.next_page, Some(2));
        assert_eq!(one.next_page_path.as_deref(), Some("/blog/2/"));
    }

    #[test]
    fn last_page_has_no_next() {
        let all = posts(25);
        let three = pager(3, &all, 10).unwrap();
        assert_eq!(three.next_page, None);
        assert_eq!(three.next_page_path, None);
        assert_eq!(three.previous_page, Some(2));
        assert_eq!(three.previous_page_path.as_deref(), Some("/blog/2/"));
    }

    #[test]
    fn middle_page_links_both_ways() {
        let all = posts(25);
        let two = pager(2, &all, 10).unwrap();
        assert_eq!(two.previous_page, Some(1));
        // Page 1 lives at the template page's URL, not at /blog/1/.
        assert_eq!(two.previous_page_path.as_deref(), Some("/blog/"));
        assert_eq!(two.next_page, Some(3));
        assert_eq!(two.next_page_path.as_deref(), Some("/blog/3/"));
    }

    #[test]
    fn first_page_path_is_set_on_every_page() {
        let all = posts(25);
        for page in 1..=3 {
            let p = pager(page, &all, 10).unwrap();
            assert_eq!(p.first_page_path.as_deref(), Some("/blog/"));
        }
    }

    #[test]
    fn page_path_is_the_pattern_base_dir() {
        let all = posts(3);
        let p = pager(1, &all, 10).unwrap();
        assert_eq!(p.page_path, "/blog");
    }

    #[test]
    fn page_past_the_end_is_out_of_range() {
        let all = posts(25);
        let err = pager(4, &all, 10).unwrap_err();
        assert!(matches!(
            err,
            PagerError::OutOfRange {
                page: 4,
                total_pages: 3
            }
        ));
    }

    #[test]
    fn precomputed_total_overrides_derivation() {
        let all = posts(25);
        let pages = vec![index_page("/blog")];
        let paths = PatternPaths::new("/blog/:num/", Path::new("/site"), &pages);
        let err = Pager::new(4, &all, 10, Some(3), &paths).unwrap_err();
        assert!(matches!(err, PagerError::OutOfRange { .. }));
        let ok = Pager::new(3, &all, 10, Some(5), &paths).unwrap();
        assert_eq!(ok.total_pages, 5);
        assert_eq!(ok.next_page, Some(4));
    }

    #[test]
    fn serializes_to_the_fixed_field_set() {
        let all = posts(12);
        let p = pager(2, &all, 5).unwrap();
        let value = serde_json::to_value(&p).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "first_page_path",
                "next_page",
                "next_page_path",
                "page",
                "page_path",
                "per_page",
                "posts",
                "previous_page",
                "previous_page_path",
                "total_pages",
                "total_posts",
            ]
        );
        assert_eq!(value["page"], 2);
        assert_eq!(value["posts"].as_array().unwrap().len(), 5);
    }
}
