use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use super::{row_bound, to_order};
use crate::domain::{DataPage, DataSource, FetchRequest, PaginationError, PaginationResult};

/// Paginates all rows of `E` matching a filter condition.
///
/// Sort keys are parsed as column names of `E`; a key naming no column is a
/// configuration error.
pub struct EntitySource<E: EntityTrait> {
    db: DatabaseConnection,
    filter: Condition,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> EntitySource<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            filter: Condition::all(),
            _entity: PhantomData,
        }
    }

    pub fn with_filter(mut self, filter: Condition) -> Self {
        self.filter = filter;
        self
    }
}

#[async_trait]
impl<E> DataSource for EntitySource<E>
where
    E: EntityTrait,
    E::Model: Sync,
{
    type Item = E::Model;

    async fn fetch(&self, request: FetchRequest) -> PaginationResult<DataPage<E::Model>> {
        let column = request.sort_column.parse::<E::Column>().map_err(|_| {
            PaginationError::Configuration(format!(
                "'{}' is not a column of '{}'",
                request.sort_column,
                E::default().table_name()
            ))
        })?;

        let query = E::find().filter(self.filter.clone());

        let total_items = query.clone().count(&self.db).await?;

        let items = query
            .order_by(column, to_order(request.order))
            .offset(row_bound(request.offset))
            .limit(row_bound(request.limit))
            .all(&self.db)
            .await?;

        Ok(DataPage::new(items, total_items))
    }
}
