//! Page count and clamping

/// `ceil(total_items / limit)`; no items means no pages.
pub fn total_pages(total_items: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total_items.div_ceil(limit)
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: u64, total_pages: u64) -> u64 {
    page.min(total_pages).max(1)
}
