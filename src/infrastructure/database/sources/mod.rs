//! SeaORM-backed data sources
//!
//! - `EntitySource`: plain repository strategy, entity + filter condition
//! - `QuerySource`: pre-built `Select` strategy with a table alias

mod entity;
mod query;

pub use entity::EntitySource;
pub use query::QuerySource;

use sea_orm::Order;

use crate::domain::{SortOrder, MAX_ROW_BOUND};

fn to_order(order: SortOrder) -> Order {
    match order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

/// `LIMIT`/`OFFSET` value the SQL binder accepts without overflowing `i64`.
fn row_bound(value: u64) -> u64 {
    value.min(MAX_ROW_BOUND)
}
