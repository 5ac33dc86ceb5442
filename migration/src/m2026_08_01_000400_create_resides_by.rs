//! Migration to create the resides_by table.
//!
//! resides_by links an issue to the unit it was raised from. An issue
//! belongs to exactly one unit.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResidesBy::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ResidesBy::UnitId).integer().not_null())
                    .col(ColumnDef::new(ResidesBy::NumberId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ResidesBy::UnitId)
                            .col(ResidesBy::NumberId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resides_by_unit_id")
                            .from(ResidesBy::Table, ResidesBy::UnitId)
                            .to(Units::Table, Units::UnitId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resides_by_number_id")
                            .from(ResidesBy::Table, ResidesBy::NumberId)
                            .to(Issues::Table, Issues::NumberId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resides_by_number_id")
                    .table(ResidesBy::Table)
                    .col(ResidesBy::NumberId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_resides_by_number_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ResidesBy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ResidesBy {
    Table,
    UnitId,
    NumberId,
}

#[derive(DeriveIden)]
enum Units {
    Table,
    UnitId,
}

#[derive(DeriveIden)]
enum Issues {
    Table,
    NumberId,
}
