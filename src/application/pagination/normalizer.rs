//! Request normalization against endpoint configuration

use super::sort::resolve_sort_column;
use crate::domain::{
    PagingRequest, PaginationResult, PaginatorConfig, SortOrder, DEFAULT_LIMIT, MAX_ROW_BOUND,
};

/// Effective paging parameters for one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    /// Raw requested page (>= 1), not yet clamped to the page count
    pub page: u64,
    pub limit: u64,
    pub sort_by: String,
    pub order_by: SortOrder,
}

impl NormalizedRequest {
    /// Rows to skip, never above [`MAX_ROW_BOUND`]. Pages past the end still
    /// fetch an empty slice and are clamped afterwards.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(MAX_ROW_BOUND)
    }
}

/// Merge the request with the endpoint configuration.
///
/// Absent or non-positive values fall back to defaults. The page size is
/// capped at `max_limit` and at [`MAX_ROW_BOUND`].
pub fn normalize(
    request: &PagingRequest,
    config: &PaginatorConfig,
) -> PaginationResult<NormalizedRequest> {
    let sort_by = resolve_sort_column(request.sort_by.as_deref(), config)?;

    let default_limit = if config.default_limit > 0 {
        config.default_limit
    } else {
        DEFAULT_LIMIT
    };
    let limit = request
        .limit
        .filter(|&l| l > 0)
        .unwrap_or(default_limit)
        .min(config.max_limit.max(1))
        .min(MAX_ROW_BOUND);

    let page = request.page.filter(|&p| p > 0).unwrap_or(1);
    let order_by = request.order_by.unwrap_or(config.default_order_by);

    Ok(NormalizedRequest {
        page,
        limit,
        sort_by,
        order_by,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PaginatorConfig {
        PaginatorConfig::new(["id", "name"])
    }

    #[test]
    fn empty_request_uses_defaults() {
        let n = normalize(&PagingRequest::new(""), &config()).unwrap();
        assert_eq!(
            n,
            NormalizedRequest {
                page: 1,
                limit: 20,
                sort_by: "id".to_string(),
                order_by: SortOrder::Asc,
            }
        );
        assert_eq!(n.offset(), 0);
    }

    #[test]
    fn configured_defaults_apply() {
        let config = config()
            .with_default_limit(5)
            .with_default_order_by(SortOrder::Desc)
            .with_default_sort_by("name");
        let n = normalize(&PagingRequest::new(""), &config).unwrap();
        assert_eq!(n.limit, 5);
        assert_eq!(n.order_by, SortOrder::Desc);
        assert_eq!(n.sort_by, "name");
    }

    #[test]
    fn zero_values_are_treated_as_absent() {
        let request = PagingRequest::new("").with_page(0).with_limit(0);
        let n = normalize(&request, &config().with_default_limit(0)).unwrap();
        assert_eq!(n.page, 1);
        assert_eq!(n.limit, 20);
    }

    #[test]
    fn request_values_win() {
        let request = PagingRequest::new("")
            .with_page(4)
            .with_limit(7)
            .with_order_by(SortOrder::Desc);
        let n = normalize(&request, &config()).unwrap();
        assert_eq!(n.page, 4);
        assert_eq!(n.limit, 7);
        assert_eq!(n.order_by, SortOrder::Desc);
        assert_eq!(n.offset(), 21);
    }

    #[test]
    fn limit_is_capped_at_max_limit() {
        let request = PagingRequest::new("").with_limit(1_000);
        assert_eq!(normalize(&request, &config()).unwrap().limit, 100);
        assert_eq!(
            normalize(&request, &config().with_max_limit(50)).unwrap().limit,
            50
        );
    }

    #[test]
    fn offset_stays_within_signed_range() {
        for page in [u64::MAX, i64::MAX as u64, 1 << 62] {
            let request = PagingRequest::new("").with_page(page).with_limit(100);
            let n = normalize(&request, &config()).unwrap();
            assert_eq!(n.page, page);
            assert_eq!(n.offset(), MAX_ROW_BOUND);
        }
    }

    #[test]
    fn huge_max_limit_keeps_limit_within_signed_range() {
        let request = PagingRequest::new("").with_limit(u64::MAX);
        let n = normalize(&request, &config().with_max_limit(u64::MAX)).unwrap();
        assert_eq!(n.limit, MAX_ROW_BOUND);
        assert_eq!(n.offset(), 0);
    }
}
