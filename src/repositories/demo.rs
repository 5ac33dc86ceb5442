//! # Demo Names Repository
//!
//! Data access for the seeded demo_names table behind the /index and /add
//! endpoints.

use crate::models::demo_name::{
    ActiveModel as DemoNameActiveModel, Column, Entity as DemoName, Model as DemoNameModel,
};
use crate::repositories::RepositoryError;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

/// Repository for demo name database operations
pub struct DemoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DemoRepository<'a> {
    /// Create a new DemoRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all names in insertion order
    pub async fn list_names(&self) -> Result<Vec<String>, RepositoryError> {
        let names = DemoName::find()
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.name)
            .collect();

        Ok(names)
    }

    /// Insert a single name
    pub async fn insert_name(&self, name: &str) -> Result<DemoNameModel, RepositoryError> {
        if name.trim().is_empty() {
            return Err(RepositoryError::validation_error("name cannot be empty"));
        }

        let row = DemoNameActiveModel {
            name: Set(name.trim().to_string()),
            ..Default::default()
        };

        let inserted = row.insert(self.db).await?;

        Ok(inserted)
    }
}
