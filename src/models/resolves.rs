//! Resolves entity model
//!
//! Associative entity recording that a landlord closed a given issue.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resolves")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub landlord_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub number_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::landlord::Entity",
        from = "Column::LandlordId",
        to = "super::landlord::Column::LandlordId"
    )]
    Landlord,
    #[sea_orm(
        belongs_to = "super::issue::Entity",
        from = "Column::NumberId",
        to = "super::issue::Column::NumberId"
    )]
    Issue,
}

impl Related<super::landlord::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Landlord.def()
    }
}

impl Related<super::issue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Issue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
