//! HTTP REST API interfaces
//!
//! - `common`: response envelope, paging extractor, error mapping
//! - `modules`: request handlers per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use common::{ApiResponse, Paginator, PagingQuery};
pub use router::{create_api_router, ApiDoc};
