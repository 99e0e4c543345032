pub mod pagination;

// Re-export key types for convenience
pub use pagination::{paginate, LinkBuilder, NormalizedRequest};
