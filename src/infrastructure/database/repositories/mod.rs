//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod booking_repository;
pub mod feedback_repository;
pub mod food_order_repository;
pub mod repository_provider;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

pub(crate) fn db_err(e: DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

pub(crate) fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
