//! Create food_orders table
//!
//! Cart lines per booking, at most one line per (booking, item).
//! `paid_quantity` counts the units already settled on a line.

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_bookings::Bookings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodOrders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FoodOrders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FoodOrders::BookingId).integer().not_null())
                    .col(ColumnDef::new(FoodOrders::ItemName).string().not_null())
                    .col(ColumnDef::new(FoodOrders::ItemPrice).big_integer().not_null())
                    .col(
                        ColumnDef::new(FoodOrders::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(FoodOrders::PaidQuantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FoodOrders::FoodPaid)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(FoodOrders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_orders_booking")
                            .from(FoodOrders::Table, FoodOrders::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_food_orders_booking_item")
                    .table(FoodOrders::Table)
                    .col(FoodOrders::BookingId)
                    .col(FoodOrders::ItemName)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FoodOrders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum FoodOrders {
    Table,
    Id,
    BookingId,
    ItemName,
    ItemPrice,
    Quantity,
    PaidQuantity,
    FoodPaid,
    CreatedAt,
}
