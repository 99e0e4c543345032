//! Pagination pipeline
//!
//! normalize -> resolve sort -> fetch (single I/O step) -> clamp -> links -> assemble

use tracing::{debug, error};

use super::calculator::{clamp_page, total_pages};
use super::links::LinkBuilder;
use super::normalizer::normalize;
use super::sort::physical_sort_expression;
use crate::domain::{
    DataSource, FetchRequest, NavigationLinks, PaginatedResult, PaginationMeta, PaginationResult,
    PagingRequest, PaginatorConfig,
};

/// Compute one page of `source` for `request`.
///
/// The data source is queried exactly once, with the offset of the requested
/// (unclamped) page. Its errors are returned unchanged.
pub async fn paginate<S>(
    request: &PagingRequest,
    source: &S,
    config: &PaginatorConfig,
) -> PaginationResult<PaginatedResult<S::Item>>
where
    S: DataSource + ?Sized,
{
    let normalized = normalize(request, config).map_err(|e| {
        error!("Paginator configuration error for {}: {}", request.path, e);
        e
    })?;

    let fetch = FetchRequest {
        sort_column: physical_sort_expression(&normalized.sort_by, config, source.table_alias()),
        order: normalized.order_by,
        limit: normalized.limit,
        offset: normalized.offset(),
    };
    debug!(
        "Fetching page {} (sort={} {}, limit={}, offset={})",
        normalized.page, fetch.sort_column, fetch.order, fetch.limit, fetch.offset
    );

    let page = source.fetch(fetch).await?;

    let total_pages = total_pages(page.total_items, normalized.limit);
    let current_page = clamp_page(normalized.page, total_pages);

    let links = LinkBuilder::new(
        &request.path,
        normalized.limit,
        &normalized.sort_by,
        normalized.order_by,
    )
    .build(current_page, total_pages);

    let meta = PaginationMeta {
        items_per_page: normalized.limit,
        total_items: page.total_items,
        current_page,
        total_pages,
        sort_by: normalized.sort_by,
        order_by: normalized.order_by,
    };

    Ok(assemble(page.items, meta, links))
}

fn assemble<T>(data: Vec<T>, meta: PaginationMeta, links: NavigationLinks) -> PaginatedResult<T> {
    PaginatedResult { data, meta, links }
}
