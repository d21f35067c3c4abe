//! Food order aggregate

pub mod model;
pub mod repository;

pub use model::{
    amount_due, cart_total, CartAction, CustomerOrder, FoodOrder, FoodOrderWithCustomer, TopItem,
};
pub use repository::FoodOrderRepository;
