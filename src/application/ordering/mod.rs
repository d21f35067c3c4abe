//! Food ordering and payment use-cases

pub mod cart;
pub mod payment;

pub use cart::{CartService, CartView};
pub use payment::{FoodPaymentOutcome, PaymentService, PaymentType, PaymentView};
