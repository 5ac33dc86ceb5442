//! Migration to create the demo_names table.
//!
//! The demo_names table is the seeded scratch table behind the /index and
//! /add endpoints.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DemoNames::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DemoNames::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DemoNames::Name).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DemoNames::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DemoNames {
    Table,
    Id,
    Name,
}
