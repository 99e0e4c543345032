//! Domain layer
//!
//! Pagination value types, the data source capability and errors.
//! Nothing here performs I/O.

pub mod error;
pub mod pagination;

pub use error::{PaginationError, PaginationResult};
pub use pagination::*;
