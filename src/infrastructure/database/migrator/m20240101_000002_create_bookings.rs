//! Create bookings table
//!
//! One row per reserved (date, time slot, table). The unique index turns a
//! second insert for the same triple into a constraint violation.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::Name).string().not_null())
                    .col(ColumnDef::new(Bookings::Email).string().not_null())
                    .col(ColumnDef::new(Bookings::Phone).string_len(15).not_null())
                    .col(ColumnDef::new(Bookings::Date).date().not_null())
                    .col(ColumnDef::new(Bookings::TimeSlot).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Bookings::Guests)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Bookings::TableNo).integer().not_null())
                    .col(
                        ColumnDef::new(Bookings::Category)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Bookings::Subcategory)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Bookings::TotalAmount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_slot_table")
                    .table(Bookings::Table)
                    .col(Bookings::Date)
                    .col(Bookings::TimeSlot)
                    .col(Bookings::TableNo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_email")
                    .table(Bookings::Table)
                    .col(Bookings::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Bookings {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Date,
    TimeSlot,
    Guests,
    TableNo,
    Category,
    Subcategory,
    Status,
    TotalAmount,
    CreatedAt,
}
