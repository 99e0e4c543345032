use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Select};

use super::{row_bound, to_order};
use crate::domain::{DataPage, DataSource, FetchRequest, PaginationResult};

/// Paginates a caller-built `Select`, which already carries its filters and joins.
///
/// The sort column arrives as a physical expression (`alias.column` or a
/// configured alias) and is applied verbatim.
pub struct QuerySource<E: EntityTrait> {
    db: DatabaseConnection,
    query: Select<E>,
    alias: String,
}

impl<E: EntityTrait> QuerySource<E> {
    /// Alias defaults to the entity's table name.
    pub fn new(db: DatabaseConnection, query: Select<E>) -> Self {
        Self {
            db,
            query,
            alias: E::default().table_name().to_string(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }
}

#[async_trait]
impl<E> DataSource for QuerySource<E>
where
    E: EntityTrait,
    E::Model: Sync,
{
    type Item = E::Model;

    fn table_alias(&self) -> Option<&str> {
        Some(&self.alias)
    }

    async fn fetch(&self, request: FetchRequest) -> PaginationResult<DataPage<E::Model>> {
        let total_items = self.query.clone().count(&self.db).await?;

        let items = self
            .query
            .clone()
            .order_by(Expr::cust(request.sort_column), to_order(request.order))
            .offset(row_bound(request.offset))
            .limit(row_bound(request.limit))
            .all(&self.db)
            .await?;

        Ok(DataPage::new(items, total_items))
    }
}
