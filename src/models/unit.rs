//! Unit entity model
//!
//! A unit is a rentable apartment/space occupied by a tenant. Many units can
//! share a tenant name; (tenant, floor) disambiguates them during report
//! lookups.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "units")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub unit_id: i32,

    /// Name of the occupying tenant
    pub tenant: String,

    pub floor: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::resides_by::Entity")]
    ResidesBy,
    #[sea_orm(has_many = "super::holds::Entity")]
    Holds,
}

impl Related<super::resides_by::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResidesBy.def()
    }
}

impl Related<super::holds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Holds.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
