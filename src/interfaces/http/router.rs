//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::FromRef, routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::modules::cats::{self, CatDto, CatHandlerState};
use super::modules::health::{self, ComponentHealth, HealthResponse, HealthState};
use crate::config::PaginationSettings;
use crate::domain::{NavigationLinks, PaginationMeta, SortOrder};

/// Shared state; each handler extracts its own slice via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub db: DatabaseConnection,
    pub pagination: PaginationSettings,
    pub started_at: Arc<Instant>,
}

impl FromRef<ApiState> for CatHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        CatHandlerState {
            db: s.db.clone(),
            pagination: s.pagination.clone(),
        }
    }
}

impl FromRef<ApiState> for HealthState {
    fn from_ref(s: &ApiState) -> Self {
        HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Cats
        cats::list_cats,
        cats::list_cats_by_query,
    ),
    components(
        schemas(
            HealthResponse,
            ComponentHealth,
            CatDto,
            PaginationMeta,
            NavigationLinks,
            SortOrder,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Cats", description = "Paginated cat listings"),
    ),
    info(
        title = "Paginator Service API",
        version = "1.0.0",
        description = "Offset pagination with sort whitelisting and navigation links",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(db: DatabaseConnection, pagination: PaginationSettings) -> Router {
    let state = ApiState {
        db,
        pagination,
        started_at: Arc::new(Instant::now()),
    };

    let cat_routes = Router::new()
        .route("/", get(cats::list_cats))
        .route("/by-query", get(cats::list_cats_by_query))
        .with_state(state.clone());

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        .with_state(state)
        // Cats
        .nest("/api/v1/cats", cat_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
