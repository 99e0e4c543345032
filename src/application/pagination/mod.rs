//! Offset pagination use case
//!
//! - `normalizer`: effective page, limit and order for a request
//! - `sort`: sort column whitelisting and physical sort expressions
//! - `calculator`: page count and clamping
//! - `links`: navigation URLs
//! - `paginator`: the pipeline tying them to a `DataSource`

pub mod calculator;
pub mod links;
pub mod normalizer;
pub mod paginator;
pub mod sort;

pub use calculator::{clamp_page, total_pages};
pub use links::LinkBuilder;
pub use normalizer::{normalize, NormalizedRequest};
pub use paginator::paginate;
pub use sort::{physical_sort_expression, resolve_sort_column};
