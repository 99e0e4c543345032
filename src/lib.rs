//! # Paginator Service
//!
//! Offset pagination over a queryable store, with sort-column whitelisting,
//! page clamping and navigation links.
//!
//! ## Architecture
//!
//! - **domain**: Paging request, configuration, result envelope, `DataSource` trait, errors
//! - **application**: The pagination pipeline (`paginate`) and its steps
//! - **infrastructure**: SeaORM database, data sources, server shutdown
//! - **interfaces**: REST API, paging extractor and Swagger documentation
//! - **config**: TOML application configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig, PaginationSettings};

pub use application::paginate;
pub use domain::{
    DataPage, DataSource, FetchRequest, NavigationLinks, PaginatedResult, PaginationError,
    PaginationMeta, PaginationResult, PagingRequest, PaginatorConfig, SortOrder,
};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, EntitySource, QuerySource};

// Re-export API router
pub use interfaces::http::create_api_router;
