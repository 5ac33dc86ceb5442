//! Landlord entity model

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "landlords")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub landlord_id: i32,

    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::holds::Entity")]
    Holds,
    #[sea_orm(has_many = "super::resolves::Entity")]
    Resolves,
}

impl Related<super::holds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Holds.def()
    }
}

impl Related<super::resolves::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resolves.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
