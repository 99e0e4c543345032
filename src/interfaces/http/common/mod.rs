//! Shared HTTP building blocks

mod error;
mod paginator;

pub use paginator::{Paginator, PagingQuery};

use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope returned by failed requests:
/// `{"success": false, "data": null, "error": "description"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload, `null` on error
    pub data: Option<T>,
    /// Error description, omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
