//! Data source capability consumed by the paginator

use async_trait::async_trait;

use super::SortOrder;
use crate::domain::PaginationResult;

/// One bounded, sorted slice requested from a data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Logical key for repository sources, physical expression for query sources
    pub sort_column: String,
    pub order: SortOrder,
    pub limit: u64,
    pub offset: u64,
}

/// A slice of items plus the count of everything matching the active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPage<T> {
    pub items: Vec<T>,
    /// Independent of the slice bounds
    pub total_items: u64,
}

impl<T> DataPage<T> {
    pub fn new(items: Vec<T>, total_items: u64) -> Self {
        Self { items, total_items }
    }
}

/// Supplies ordered slices of a filtered collection.
///
/// Implementations own their filtering: a repository source carries its
/// predicate, a query source carries the pre-built query.
#[async_trait]
pub trait DataSource: Send + Sync {
    type Item: Send;

    /// Table alias of a pre-built query. Sources returning `Some` receive a
    /// physical sort expression instead of the logical sort key.
    fn table_alias(&self) -> Option<&str> {
        None
    }

    async fn fetch(&self, request: FetchRequest) -> PaginationResult<DataPage<Self::Item>>;
}
