//! Paginated response envelope

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::SortOrder;

/// Derived paging metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub items_per_page: u64,
    pub total_items: u64,
    /// Clamped, always in `[1, max(total_pages, 1)]`
    pub current_page: u64,
    pub total_pages: u64,
    pub sort_by: String,
    pub order_by: SortOrder,
}

/// Navigation URLs relative to the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<String>,
    pub current_page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_page: Option<String>,
}

/// One page of items with its metadata and links.
///
/// Serializes as `{"data": [...], "meta": {...}, "links": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
    pub links: NavigationLinks,
}

impl<T> PaginatedResult<T> {
    /// Convert the items (e.g. entity model to DTO), keeping meta and links.
    pub fn map<U, F>(self, f: F) -> PaginatedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResult {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
            links: self.links,
        }
    }
}
