//! # Landlord Repository
//!
//! Landlord lookups, portfolio counts, and resolution recording. The count
//! and listing queries join the associative tables (resides_by, holds,
//! resolves) through the entity relations rather than hand-written SQL.

use crate::models::{holds, issue, landlord, resides_by, resolves, unit};
use crate::repositories::RepositoryError;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

/// Repository for landlord database operations
pub struct LandlordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LandlordRepository<'a> {
    /// Create a new LandlordRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find a landlord by name, if any
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<landlord::Model>, RepositoryError> {
        let found = landlord::Entity::find()
            .filter(landlord::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(found)
    }

    /// Find a landlord by id, if any
    pub async fn find_by_id(
        &self,
        landlord_id: i32,
    ) -> Result<Option<landlord::Model>, RepositoryError> {
        let found = landlord::Entity::find_by_id(landlord_id).one(self.db).await?;

        Ok(found)
    }

    /// Count issues reported across all units the landlord holds
    pub async fn issue_count(&self, landlord_id: i32) -> Result<u64, RepositoryError> {
        let count = resides_by::Entity::find()
            .join(JoinType::InnerJoin, resides_by::Relation::Unit.def())
            .join(JoinType::InnerJoin, unit::Relation::Holds.def())
            .filter(holds::Column::LandlordId.eq(landlord_id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Count issues the landlord has resolved
    pub async fn resolved_count(&self, landlord_id: i32) -> Result<u64, RepositoryError> {
        let count = resolves::Entity::find()
            .filter(resolves::Column::LandlordId.eq(landlord_id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// List the landlord's issues that have no resolution recorded yet,
    /// oldest number first
    pub async fn unresolved_issues(
        &self,
        landlord_id: i32,
    ) -> Result<Vec<issue::Model>, RepositoryError> {
        let issues = issue::Entity::find()
            .join(JoinType::InnerJoin, issue::Relation::ResidesBy.def())
            .join(JoinType::InnerJoin, resides_by::Relation::Unit.def())
            .join(JoinType::InnerJoin, unit::Relation::Holds.def())
            .join(JoinType::LeftJoin, issue::Relation::Resolves.def())
            .filter(holds::Column::LandlordId.eq(landlord_id))
            .filter(resolves::Column::NumberId.is_null())
            .order_by_asc(issue::Column::NumberId)
            .all(self.db)
            .await?;

        Ok(issues)
    }

    /// Record that the landlord resolved the given issue.
    ///
    /// The issue must belong to the landlord's portfolio (linked through
    /// resides_by and holds); resolving it twice is a conflict.
    pub async fn record_resolution(
        &self,
        landlord_id: i32,
        number_id: i32,
    ) -> Result<resolves::Model, RepositoryError> {
        let in_portfolio = resides_by::Entity::find()
            .join(JoinType::InnerJoin, resides_by::Relation::Unit.def())
            .join(JoinType::InnerJoin, unit::Relation::Holds.def())
            .filter(resides_by::Column::NumberId.eq(number_id))
            .filter(holds::Column::LandlordId.eq(landlord_id))
            .count(self.db)
            .await?
            > 0;

        if !in_portfolio {
            return Err(RepositoryError::NotFound(format!(
                "issue {} in landlord {}'s portfolio",
                number_id, landlord_id
            )));
        }

        let row = resolves::ActiveModel {
            landlord_id: Set(landlord_id),
            number_id: Set(number_id),
        };

        match row.insert(self.db).await {
            Ok(stored) => Ok(stored),
            Err(err) if crate::error::is_unique_violation(&err) => Err(RepositoryError::Conflict(
                format!("issue {} is already resolved", number_id),
            )),
            Err(err) => Err(err.into()),
        }
    }
}
