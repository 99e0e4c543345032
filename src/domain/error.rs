//! Domain errors

use thiserror::Error;

/// Failures of a pagination call.
///
/// Bad client input is never an error; it is replaced by defaults.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// The endpoint is misconfigured (server-side, not the client's fault)
    #[error("Paginator misconfigured: {0}")]
    Configuration(String),

    /// Storage failure, propagated as-is
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Failure of a non-database data source
    #[error("Data source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PaginationError {
    /// Whether the failure comes from endpoint configuration rather than I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Result type for pagination operations
pub type PaginationResult<T> = Result<T, PaginationError>;
