//! Create contact_messages table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactMessages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactMessages::Name).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Email).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Subject).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Message).text().not_null())
                    .col(
                        ColumnDef::new(ContactMessages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactMessages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ContactMessages {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    CreatedAt,
}
