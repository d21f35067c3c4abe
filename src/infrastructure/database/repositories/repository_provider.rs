//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::booking::BookingRepository;
use crate::domain::feedback::FeedbackRepository;
use crate::domain::food_order::FoodOrderRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::UserRepository;

use super::booking_repository::SeaOrmBookingRepository;
use super::feedback_repository::SeaOrmFeedbackRepository;
use super::food_order_repository::SeaOrmFoodOrderRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let booking = repos.bookings().find_by_id(7).await?;
/// let cart = repos.food_orders().list_for_booking(7).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    bookings: SeaOrmBookingRepository,
    food_orders: SeaOrmFoodOrderRepository,
    feedback: SeaOrmFeedbackRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            food_orders: SeaOrmFoodOrderRepository::new(db.clone()),
            feedback: SeaOrmFeedbackRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn food_orders(&self) -> &dyn FoodOrderRepository {
        &self.food_orders
    }

    fn feedback(&self) -> &dyn FeedbackRepository {
        &self.feedback
    }
}
