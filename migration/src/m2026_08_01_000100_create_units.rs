//! Migration to create the units table.
//!
//! A unit is a rentable space occupied by a tenant. Tenant names are not
//! unique; the (tenant, floor) pair is what report lookups key on.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Units::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Units::UnitId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Units::Tenant).text().not_null())
                    .col(ColumnDef::new(Units::Floor).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Report lookups resolve units by (tenant, floor)
        manager
            .create_index(
                Index::create()
                    .name("idx_units_tenant_floor")
                    .table(Units::Table)
                    .col(Units::Tenant)
                    .col(Units::Floor)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_units_tenant_floor").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Units::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Units {
    Table,
    UnitId,
    Tenant,
    Floor,
}
