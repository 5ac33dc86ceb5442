//! # Unit Repository
//!
//! Lookup of units by their occupying tenant. Tenant names are not unique,
//! so lookups always key on the (tenant, floor) pair.

use crate::models::unit::{Column, Entity as Unit, Model as UnitModel};
use crate::repositories::RepositoryError;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// Repository for unit database operations
pub struct UnitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnitRepository<'a> {
    /// Create a new UnitRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find the unit occupied by `tenant` on `floor`, if any
    pub async fn find_by_tenant_and_floor(
        &self,
        tenant: &str,
        floor: i32,
    ) -> Result<Option<UnitModel>, RepositoryError> {
        let unit = Unit::find()
            .filter(Column::Tenant.eq(tenant))
            .filter(Column::Floor.eq(floor))
            .one(self.db)
            .await?;

        Ok(unit)
    }
}
