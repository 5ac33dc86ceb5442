//! Migration to create the landlords table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Landlords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Landlords::LandlordId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Landlords::Name).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_landlords_name")
                    .table(Landlords::Table)
                    .col(Landlords::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_landlords_name").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Landlords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Landlords {
    Table,
    LandlordId,
    Name,
}
