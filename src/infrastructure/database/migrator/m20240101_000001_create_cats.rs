//! Migration to create cats table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cats::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cats::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Cats::Color).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Cats::DateCreated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cats_color")
                    .table(Cats::Table)
                    .col(Cats::Color)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cats::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Cats {
    Table,
    Id,
    Name,
    Color,
    DateCreated,
}
