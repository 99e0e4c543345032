//! Cat listing handlers
//!
//! Two listings over the same table, one per data source strategy:
//! `/api/v1/cats` filters an entity repository, `/api/v1/cats/by-query`
//! paginates a pre-built `Select`.

use axum::{
    extract::{Query, State},
    Json,
};
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter};

use super::dto::{CatDto, CatFilter};
use crate::application::paginate;
use crate::config::PaginationSettings;
use crate::domain::{PaginatedResult, PaginationError, PaginatorConfig};
use crate::infrastructure::database::entities::cat;
use crate::infrastructure::database::{EntitySource, QuerySource};
use crate::interfaces::http::common::{Paginator, PagingQuery};

/// Cat handler state
#[derive(Clone)]
pub struct CatHandlerState {
    pub db: DatabaseConnection,
    pub pagination: PaginationSettings,
}

/// Repository listing: sort keys are the entity's column names.
pub fn cats_config(settings: &PaginationSettings) -> PaginatorConfig {
    settings.apply(PaginatorConfig::new(["id", "name", "date_created"]))
}

/// Query listing: public camelCase keys, translated through column aliases.
pub fn cats_query_config(settings: &PaginationSettings) -> PaginatorConfig {
    settings.apply(
        PaginatorConfig::new(["id", "name", "dateCreated"])
            .with_default_sort_by("dateCreated")
            .with_column_alias("dateCreated", "cats.date_created"),
    )
}

#[utoipa::path(
    get,
    path = "/api/v1/cats",
    tag = "Cats",
    params(PagingQuery, CatFilter),
    responses(
        (status = 200, description = "Page of cats", body = PaginatedResult<CatDto>),
        (status = 500, description = "Database error"),
        (status = 503, description = "Paginator misconfigured")
    )
)]
pub async fn list_cats(
    State(state): State<CatHandlerState>,
    Paginator(request): Paginator,
    Query(filter): Query<CatFilter>,
) -> Result<Json<PaginatedResult<CatDto>>, PaginationError> {
    let mut condition = Condition::all();
    if let Some(color) = filter.color {
        condition = condition.add(cat::Column::Color.eq(color));
    }

    let source = EntitySource::<cat::Entity>::new(state.db.clone()).with_filter(condition);
    let page = paginate(&request, &source, &cats_config(&state.pagination)).await?;

    Ok(Json(page.map(CatDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/cats/by-query",
    tag = "Cats",
    params(PagingQuery, CatFilter),
    responses(
        (status = 200, description = "Page of cats", body = PaginatedResult<CatDto>),
        (status = 500, description = "Database error"),
        (status = 503, description = "Paginator misconfigured")
    )
)]
pub async fn list_cats_by_query(
    State(state): State<CatHandlerState>,
    Paginator(request): Paginator,
    Query(filter): Query<CatFilter>,
) -> Result<Json<PaginatedResult<CatDto>>, PaginationError> {
    let mut query = cat::Entity::find();
    if let Some(color) = filter.color {
        query = query.filter(cat::Column::Color.eq(color));
    }

    let source = QuerySource::new(state.db.clone(), query).with_alias("cats");
    let page = paginate(&request, &source, &cats_query_config(&state.pagination)).await?;

    Ok(Json(page.map(CatDto::from)))
}
