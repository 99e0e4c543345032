//! Demo data

use chrono::{Duration, Utc};
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};
use tracing::info;

use super::entities::cat;

const DEMO_CATS: &[(&str, &str)] = &[
    ("Milo", "ginger"),
    ("Luna", "black"),
    ("Oliver", "tabby"),
    ("Bella", "white"),
    ("Simba", "ginger"),
    ("Nala", "calico"),
    ("Leo", "black"),
];

/// Insert `(name, color)` rows. Creation times increase by one second per
/// row, so `date_created` order matches insertion order.
pub async fn seed_cats(db: &DatabaseConnection, cats: &[(&str, &str)]) -> Result<(), DbErr> {
    if cats.is_empty() {
        return Ok(());
    }

    let base = Utc::now();
    let models = cats.iter().enumerate().map(|(i, (name, color))| cat::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        color: Set(color.to_string()),
        date_created: Set(base + Duration::seconds(i as i64)),
    });

    cat::Entity::insert_many(models).exec(db).await?;
    Ok(())
}

/// Seed the demo cats when the table is empty.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let existing = cat::Entity::find().count(db).await?;
    if existing > 0 {
        return Ok(());
    }

    info!("Seeding {} demo cats", DEMO_CATS.len());
    seed_cats(db, DEMO_CATS).await
}
