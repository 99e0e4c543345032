//! HTTP mapping of pagination failures

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::ApiResponse;
use crate::domain::PaginationError;

impl PaginationError {
    /// Misconfiguration is the server's fault and reported as unavailable;
    /// everything else is an internal error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Source(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PaginationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if !self.is_configuration() {
            error!("Pagination failed: {}", self);
        }
        (status, Json(ApiResponse::<()>::error(self.to_string()))).into_response()
    }
}
