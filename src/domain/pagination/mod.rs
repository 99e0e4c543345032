//! Pagination aggregate
//!
//! Value types exchanged between the transport adapter, the paginator and
//! the data source.

pub mod config;
pub mod request;
pub mod result;
pub mod source;

pub use config::{PaginatorConfig, DEFAULT_LIMIT, DEFAULT_MAX_LIMIT, MAX_ROW_BOUND};
pub use request::{PagingRequest, SortOrder};
pub use result::{NavigationLinks, PaginatedResult, PaginationMeta};
pub use source::{DataPage, DataSource, FetchRequest};
