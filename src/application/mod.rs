//! Application layer: use-case services over the repository provider

pub mod booking;
pub mod dashboard;
pub mod feedback;
pub mod identity;
pub mod ordering;

pub use booking::{Availability, BookingRequest, BookingService};
pub use dashboard::{Dashboard, DashboardService};
pub use feedback::FeedbackService;
pub use identity::{AccountService, AdminSeed, Registration};
pub use ordering::{CartService, CartView, FoodPaymentOutcome, PaymentService, PaymentView};
