//! Issue entity model
//!
//! A maintenance report tied to a unit through resides_by. The number is a
//! database-generated sequential key.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "issues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub number_id: i32,

    pub description: String,

    /// Date the issue was reported
    pub reported_on: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::resides_by::Entity")]
    ResidesBy,
    #[sea_orm(has_many = "super::resolves::Entity")]
    Resolves,
}

impl Related<super::resides_by::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResidesBy.def()
    }
}

impl Related<super::resolves::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resolves.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
