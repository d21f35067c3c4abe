//! Food order repository interface
//!
//! Cart mutations take the owning booking id so a request can only touch
//! lines of the booking held in its session.

use async_trait::async_trait;

use super::model::{CustomerOrder, FoodOrder, FoodOrderWithCustomer, TopItem};
use crate::domain::DomainResult;

#[async_trait]
pub trait FoodOrderRepository: Send + Sync {
    /// Lines of a booking, in insertion order
    async fn list_for_booking(&self, booking_id: i32) -> DomainResult<Vec<FoodOrder>>;

    /// Insert the item with quantity 1, or add one owed unit to the existing line
    async fn add_item(&self, booking_id: i32, item_name: &str, item_price: i64)
        -> DomainResult<()>;

    async fn increase(&self, booking_id: i32, order_id: i32) -> DomainResult<()>;

    /// Drop one owed unit; an unpaid line at quantity 1 is removed instead
    async fn decrease(&self, booking_id: i32, order_id: i32) -> DomainResult<()>;

    /// Remove the line, or only its owed units when some are already paid
    async fn delete(&self, booking_id: i32, order_id: i32) -> DomainResult<()>;

    /// Settle every owed unit of the booking, returns rows touched
    async fn mark_paid_for_booking(&self, booking_id: i32) -> DomainResult<u64>;

    async fn count(&self) -> DomainResult<u64>;

    /// Σ(price × paid quantity) over all lines
    async fn paid_revenue(&self) -> DomainResult<i64>;

    /// All lines with customer name/email, newest first
    async fn list_with_customers(&self) -> DomainResult<Vec<FoodOrderWithCustomer>>;

    /// Items with the highest total quantity
    async fn top_items(&self, limit: u64) -> DomainResult<Vec<TopItem>>;

    /// Lines of all bookings made with this email, newest first
    async fn list_for_email(&self, email: &str) -> DomainResult<Vec<CustomerOrder>>;
}
