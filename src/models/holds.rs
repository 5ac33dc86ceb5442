//! Holds entity model
//!
//! Associative entity recording which landlord owns which unit.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "holds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub unit_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub landlord_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::unit::Entity",
        from = "Column::UnitId",
        to = "super::unit::Column::UnitId"
    )]
    Unit,
    #[sea_orm(
        belongs_to = "super::landlord::Entity",
        from = "Column::LandlordId",
        to = "super::landlord::Column::LandlordId"
    )]
    Landlord,
}

impl Related<super::unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Unit.def()
    }
}

impl Related<super::landlord::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Landlord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
