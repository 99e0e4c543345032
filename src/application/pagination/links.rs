//! Navigation link construction

use crate::domain::{NavigationLinks, SortOrder};

/// Builds `<path>?page=<p>&limit=..&sortBy=..&orderBy=..` URLs.
/// Only the page number varies between links of one response.
#[derive(Debug, Clone)]
pub struct LinkBuilder<'a> {
    path: &'a str,
    limit: u64,
    sort_by: &'a str,
    order_by: SortOrder,
}

impl<'a> LinkBuilder<'a> {
    pub fn new(path: &'a str, limit: u64, sort_by: &'a str, order_by: SortOrder) -> Self {
        Self {
            path,
            limit,
            sort_by,
            order_by,
        }
    }

    pub fn link(&self, page: u64) -> String {
        format!(
            "{}?page={}&limit={}&sortBy={}&orderBy={}",
            self.path, page, self.limit, self.sort_by, self.order_by
        )
    }

    /// Links for the clamped `page`.
    ///
    /// An empty result set counts as a single page here, so it only gets a
    /// `current_page` link.
    pub fn build(&self, page: u64, total_pages: u64) -> NavigationLinks {
        let last = total_pages.max(1);

        NavigationLinks {
            first_page: (page != 1).then(|| self.link(1)),
            previous_page: (page > 1).then(|| self.link(page - 1)),
            current_page: self.link(page),
            next_page: (page < last).then(|| self.link(page + 1)),
            last_page: (page != last).then(|| self.link(last)),
        }
    }
}
