//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_bookings;
mod m20240101_000003_create_food_orders;
mod m20240101_000004_create_feedbacks;
mod m20240101_000005_create_contact_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_bookings::Migration),
            Box::new(m20240101_000003_create_food_orders::Migration),
            Box::new(m20240101_000004_create_feedbacks::Migration),
            Box::new(m20240101_000005_create_contact_messages::Migration),
        ]
    }
}
