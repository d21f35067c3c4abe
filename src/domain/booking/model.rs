//! Table booking domain entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Rejection shown when a (date, slot, table) is already reserved.
pub const SLOT_TAKEN_MESSAGE: &str =
    "Sorry, this table is already booked for the selected time. Please choose another slot.";

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Created, table fee not yet confirmed
    Pending,
    /// Table fee confirmed
    Paid,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "paid" => Self::Paid,
            _ => Self::Pending,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reserved table for one time slot on one date.
///
/// Customer details are a snapshot taken from the booking form, not a
/// reference to a registered user.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub guests: i32,
    pub table_no: i32,
    pub category: String,
    pub subcategory: String,
    pub status: BookingStatus,
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_paid(&self) -> bool {
        self.status == BookingStatus::Paid
    }
}

/// Fields for inserting a booking; status always starts as pending.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub guests: i32,
    pub table_no: i32,
    pub category: String,
    pub subcategory: String,
    pub total_amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrip() {
        assert_eq!(BookingStatus::parse("paid"), BookingStatus::Paid);
        assert_eq!(BookingStatus::parse("pending"), BookingStatus::Pending);
        assert_eq!(BookingStatus::Paid.to_string(), "paid");
    }

    #[test]
    fn unknown_status_defaults_to_pending() {
        assert_eq!(BookingStatus::parse("refunded"), BookingStatus::Pending);
    }
}
