//! Booking service: availability lookup, submission and history

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::booking::{
    available_slots, available_tables, is_known_slot, is_known_table, SLOT_TAKEN_MESSAGE, TABLES,
    TIME_SLOTS,
};
use crate::domain::{Booking, DomainError, DomainResult, NewBooking, RepositoryProvider};

/// Slots and tables still open for the requested date / slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub date: Option<NaiveDate>,
    pub time_slot: Option<String>,
    pub time_slots: Vec<&'static str>,
    pub tables: Vec<i32>,
}

/// Booking form input
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time_slot: String,
    pub guests: i32,
    pub table_no: i32,
    pub category: String,
    pub subcategory: String,
}

pub fn parse_date(raw: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::Validation("Invalid date".into()))
}

impl BookingRequest {
    fn into_new_booking(self, total_amount: i64) -> DomainResult<NewBooking> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_lowercase();
        let phone = self.phone.trim().to_string();

        if name.is_empty() || email.is_empty() || phone.is_empty() {
            return Err(DomainError::Validation(
                "Name, email and phone are required".into(),
            ));
        }
        if self.guests < 1 {
            return Err(DomainError::Validation("Guests must be at least 1".into()));
        }
        let time_slot = self.time_slot.trim().to_string();
        if !is_known_slot(&time_slot) {
            return Err(DomainError::Validation("Invalid time slot".into()));
        }
        if !is_known_table(self.table_no) {
            return Err(DomainError::Validation("Invalid table number".into()));
        }
        let date = parse_date(&self.date)?;

        Ok(NewBooking {
            name,
            email,
            phone,
            date,
            time_slot,
            guests: self.guests,
            table_no: self.table_no,
            category: self.category.trim().to_string(),
            subcategory: self.subcategory.trim().to_string(),
            total_amount,
        })
    }
}

pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    table_price: i64,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, table_price: i64) -> Self {
        Self { repos, table_price }
    }

    pub fn table_price(&self) -> i64 {
        self.table_price
    }

    /// Without a date the full catalogs are returned. A date filters out
    /// fully booked slots; a date and slot also filter out booked tables.
    pub async fn availability(
        &self,
        date: Option<&str>,
        time_slot: Option<&str>,
    ) -> DomainResult<Availability> {
        let date = date
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(parse_date)
            .transpose()?;
        let time_slot = time_slot
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let Some(day) = date else {
            return Ok(Availability {
                date: None,
                time_slot,
                time_slots: TIME_SLOTS.to_vec(),
                tables: TABLES.to_vec(),
            });
        };

        let counts = self.repos.bookings().booked_counts_by_slot(day).await?;
        let time_slots = available_slots(&counts);

        let tables = match &time_slot {
            Some(slot) => {
                let booked = self.repos.bookings().booked_tables(day, slot).await?;
                available_tables(&booked)
            }
            None => TABLES.to_vec(),
        };

        Ok(Availability {
            date,
            time_slot,
            time_slots,
            tables,
        })
    }

    /// Validate and insert a pending booking priced at the table fee.
    ///
    /// An occupied (date, slot, table) yields `DomainError::Conflict`, both
    /// from the pre-check and from the unique index on insert.
    pub async fn submit(&self, request: BookingRequest) -> DomainResult<Booking> {
        let new = request.into_new_booking(self.table_price)?;

        let taken = self
            .repos
            .bookings()
            .is_taken(new.date, &new.time_slot, new.table_no)
            .await?;
        if taken {
            warn!(date = %new.date, slot = %new.time_slot, table = new.table_no, "Table already booked");
            return Err(DomainError::Conflict(SLOT_TAKEN_MESSAGE.into()));
        }

        let booking = self.repos.bookings().create(new).await?;
        info!(
            booking_id = booking.id,
            date = %booking.date,
            slot = %booking.time_slot,
            table = booking.table_no,
            "Booking created"
        );
        Ok(booking)
    }

    /// Paid bookings made with this email, newest first
    pub async fn my_bookings(&self, email: &str) -> DomainResult<Vec<Booking>> {
        self.repos
            .bookings()
            .list_paid_for_email(&email.trim().to_lowercase())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookingRequest {
        BookingRequest {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            date: "2024-06-01".into(),
            time_slot: "10:00 AM - 12:00 PM".into(),
            guests: 2,
            table_no: 3,
            category: "Birthday".into(),
            subcategory: "Family".into(),
        }
    }

    #[test]
    fn well_formed_request_converts() {
        let b = request().into_new_booking(500).unwrap();
        assert_eq!(b.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(b.total_amount, 500);
    }

    #[test]
    fn shape_errors() {
        let mut r = request();
        r.guests = 0;
        assert!(matches!(r.into_new_booking(500), Err(DomainError::Validation(_))));

        let mut r = request();
        r.table_no = 6;
        assert!(matches!(r.into_new_booking(500), Err(DomainError::Validation(_))));

        let mut r = request();
        r.time_slot = "Midnight".into();
        assert!(matches!(r.into_new_booking(500), Err(DomainError::Validation(_))));

        let mut r = request();
        r.date = "01/06/2024".into();
        assert!(matches!(r.into_new_booking(500), Err(DomainError::Validation(_))));

        let mut r = request();
        r.phone = " ".into();
        assert!(matches!(r.into_new_booking(500), Err(DomainError::Validation(_))));
    }
}
