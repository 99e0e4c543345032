#![allow(dead_code)]

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

use paginator::infrastructure::database::migrator::Migrator;
use paginator::infrastructure::database::seed::seed_cats;
use paginator::{init_database, DatabaseConfig};

/// Fresh in-memory database with `(name, color)` cats inserted in order.
pub async fn database_with(cats: &[(&str, &str)]) -> DatabaseConnection {
    let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    seed_cats(&db, cats).await.unwrap();
    db
}

pub const FIVE_CATS: &[(&str, &str)] = &[
    ("Milo", "ginger"),
    ("Luna", "black"),
    ("Oliver", "tabby"),
    ("Bella", "black"),
    ("Simba", "ginger"),
];
