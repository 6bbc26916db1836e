//! Shared test utilities for the pagebound test suite.
//!
//! Builders for posts, index pages, and configs, plus panicking finders
//! that report what was available on a miss. Everything assumes a site
//! rooted at `/site`, which is what all fixtures use.

use std::path::PathBuf;

use crate::types::{Post, SiteConfig, SitePage};

/// Source root shared by all test fixtures.
pub const SOURCE: &str = "/site";

/// A visible, untagged post.
pub fn post(title: &str) -> Post {
    Post::new(title)
}

/// A visible post carrying one tag.
pub fn tagged(title: &str, tag: &str) -> Post {
    let mut post = Post::new(title);
    post.tags.push(tag.to_string());
    post
}

/// `n` visible posts titled `post-1` through `post-n`.
pub fn posts(n: usize) -> Vec<Post> {
    (1..=n).map(|i| post(&format!("post-{i}"))).collect()
}

/// Titles of a post slice, in order.
pub fn titles(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|p| p.title.as_str()).collect()
}

/// An `index.html` page under the fixture source root.
pub fn index_page(dir: &str) -> SitePage {
    SitePage::new(SOURCE, dir, "index.html")
}

/// A config over the fixture source root.
pub fn site_config(per_page: usize, paginate_paths: &[&str]) -> SiteConfig {
    SiteConfig {
        source: PathBuf::from(SOURCE),
        per_page,
        paginate_paths: paginate_paths.iter().map(|p| p.to_string()).collect(),
    }
}

/// Find a page by resolved URL. Panics if not found.
pub fn find_page<'a>(pages: &'a [SitePage], url: &str) -> &'a SitePage {
    pages.iter().find(|p| p.url() == url).unwrap_or_else(|| {
        let urls: Vec<String> = pages.iter().map(SitePage::url).collect();
        panic!("page '{url}' not found. Available: {urls:?}")
    })
}
