//! Database entities module

pub mod booking;
pub mod contact_message;
pub mod feedback;
pub mod food_order;
pub mod user;

pub use booking::Entity as Booking;
pub use contact_message::Entity as ContactMessage;
pub use feedback::Entity as Feedback;
pub use food_order::Entity as FoodOrder;
pub use user::Entity as User;
