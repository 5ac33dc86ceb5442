//! Database migrations for Rentdesk.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2026_08_01_000001_create_demo_names;
mod m2026_08_01_000100_create_units;
mod m2026_08_01_000200_create_landlords;
mod m2026_08_01_000300_create_issues;
mod m2026_08_01_000400_create_resides_by;
mod m2026_08_01_000500_create_holds;
mod m2026_08_01_000600_create_resolves;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2026_08_01_000001_create_demo_names::Migration),
            Box::new(m2026_08_01_000100_create_units::Migration),
            Box::new(m2026_08_01_000200_create_landlords::Migration),
            Box::new(m2026_08_01_000300_create_issues::Migration),
            Box::new(m2026_08_01_000400_create_resides_by::Migration),
            Box::new(m2026_08_01_000500_create_holds::Migration),
            Box::new(m2026_08_01_000600_create_resolves::Migration),
        ]
    }
}
