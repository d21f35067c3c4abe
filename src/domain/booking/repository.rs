//! Booking repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{Booking, NewBooking};
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a pending booking. A booking already holding the same
    /// (date, slot, table) yields `DomainError::Conflict`.
    async fn create(&self, booking: NewBooking) -> DomainResult<Booking>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>>;

    /// Whether (date, slot, table) is already booked
    async fn is_taken(&self, date: NaiveDate, time_slot: &str, table_no: i32)
        -> DomainResult<bool>;

    /// Number of bookings per slot on a date
    async fn booked_counts_by_slot(&self, date: NaiveDate) -> DomainResult<Vec<(String, u64)>>;

    /// Table numbers booked for a (date, slot)
    async fn booked_tables(&self, date: NaiveDate, time_slot: &str) -> DomainResult<Vec<i32>>;

    /// Set status to paid
    async fn mark_paid(&self, id: i32) -> DomainResult<()>;

    /// All bookings, newest first
    async fn list_all(&self) -> DomainResult<Vec<Booking>>;

    /// Paid bookings made with this email, newest first
    async fn list_paid_for_email(&self, email: &str) -> DomainResult<Vec<Booking>>;

    async fn count(&self) -> DomainResult<u64>;

    /// Sum of `total_amount` over all bookings
    async fn total_amount(&self) -> DomainResult<i64>;
}
