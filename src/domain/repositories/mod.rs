//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::booking::BookingRepository;
use super::feedback::FeedbackRepository;
use super::food_order::FoodOrderRepository;
use super::user::UserRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let booking = repos.bookings().find_by_id(42).await?;
///     let lines = repos.food_orders().list_for_booking(42).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn food_orders(&self) -> &dyn FoodOrderRepository;
    fn feedback(&self) -> &dyn FeedbackRepository;
}
