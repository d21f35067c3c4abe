//! Booking entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub email: String,
    pub phone: String,

    pub date: Date,
    pub time_slot: String,
    pub guests: i32,
    pub table_no: i32,

    pub category: String,
    pub subcategory: String,

    /// Booking status: pending, paid
    pub status: String,

    pub total_amount: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::food_order::Entity")]
    FoodOrders,
}

impl Related<super::food_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
