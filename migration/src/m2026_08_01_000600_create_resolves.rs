//! Migration to create the resolves table.
//!
//! resolves records that a landlord closed a given issue. The composite
//! primary key turns a repeat resolution into a conflict instead of a
//! duplicate row.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resolves::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Resolves::LandlordId).integer().not_null())
                    .col(ColumnDef::new(Resolves::NumberId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(Resolves::LandlordId)
                            .col(Resolves::NumberId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resolves_landlord_id")
                            .from(Resolves::Table, Resolves::LandlordId)
                            .to(Landlords::Table, Landlords::LandlordId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resolves_number_id")
                            .from(Resolves::Table, Resolves::NumberId)
                            .to(Issues::Table, Issues::NumberId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resolves_number_id")
                    .table(Resolves::Table)
                    .col(Resolves::NumberId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_resolves_number_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Resolves::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Resolves {
    Table,
    LandlordId,
    NumberId,
}

#[derive(DeriveIden)]
enum Landlords {
    Table,
    LandlordId,
}

#[derive(DeriveIden)]
enum Issues {
    Table,
    NumberId,
}
