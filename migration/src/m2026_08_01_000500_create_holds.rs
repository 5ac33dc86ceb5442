//! Migration to create the holds table.
//!
//! holds records unit ownership. A unit is held by exactly one landlord.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Holds::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Holds::UnitId).integer().not_null())
                    .col(ColumnDef::new(Holds::LandlordId).integer().not_null())
                    .primary_key(Index::create().col(Holds::UnitId).col(Holds::LandlordId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_holds_unit_id")
                            .from(Holds::Table, Holds::UnitId)
                            .to(Units::Table, Units::UnitId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_holds_landlord_id")
                            .from(Holds::Table, Holds::LandlordId)
                            .to(Landlords::Table, Landlords::LandlordId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_holds_landlord_id")
                    .table(Holds::Table)
                    .col(Holds::LandlordId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_holds_landlord_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Holds::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Holds {
    Table,
    UnitId,
    LandlordId,
}

#[derive(DeriveIden)]
enum Units {
    Table,
    UnitId,
}

#[derive(DeriveIden)]
enum Landlords {
    Table,
    LandlordId,
}
