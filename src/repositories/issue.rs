//! # Issue Repository
//!
//! Creation of maintenance issues. An issue and the resides_by row linking
//! it to its unit are written in a single transaction so a failed link
//! insert cannot leave an orphaned issue behind.

use crate::models::{issue, resides_by};
use crate::repositories::RepositoryError;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};

/// Repository for issue database operations
pub struct IssueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IssueRepository<'a> {
    /// Create a new IssueRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Report a new issue against a unit.
    ///
    /// Inserts the issue row and its resides_by link atomically and returns
    /// the stored issue with its database-generated number.
    pub async fn report_issue(
        &self,
        unit_id: i32,
        description: &str,
        reported_on: NaiveDate,
    ) -> Result<issue::Model, RepositoryError> {
        if description.trim().is_empty() {
            return Err(RepositoryError::validation_error(
                "issue description cannot be empty",
            ));
        }

        let txn = self.db.begin().await?;

        let stored = issue::ActiveModel {
            description: Set(description.trim().to_string()),
            reported_on: Set(reported_on),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        resides_by::ActiveModel {
            unit_id: Set(unit_id),
            number_id: Set(stored.number_id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(stored)
    }
}
