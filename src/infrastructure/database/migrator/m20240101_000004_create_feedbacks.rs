//! Create feedbacks table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedbacks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Feedbacks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Feedbacks::Name).string().not_null())
                    .col(ColumnDef::new(Feedbacks::Email).string().not_null())
                    .col(ColumnDef::new(Feedbacks::Message).text().not_null())
                    .col(
                        ColumnDef::new(Feedbacks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_feedbacks_created_at")
                    .table(Feedbacks::Table)
                    .col(Feedbacks::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feedbacks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Feedbacks {
    Table,
    Id,
    Name,
    Email,
    Message,
    CreatedAt,
}
