//! Domain layer: entities, catalogs and repository interfaces

pub mod booking;
pub mod feedback;
pub mod food_order;
pub mod menu;
pub mod repositories;
pub mod user;

pub use booking::{Booking, BookingRepository, BookingStatus, NewBooking};
pub use feedback::{ContactMessage, Feedback, FeedbackRepository, NewContactMessage, NewFeedback};
pub use food_order::{CartAction, FoodOrder, FoodOrderRepository};
pub use repositories::{DomainResult, RepositoryProvider};
pub use user::{CreateUserDto, User, UserRepository, UserRole};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
