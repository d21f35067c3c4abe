use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::{Availability, BookingRequest};

/// `GET /booking?date=&time=`
#[derive(Debug, Default, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BookingForm {
    #[validate(length(min = 1, message = "Name, email and phone are required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Name, email and phone are required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Name, email and phone are required"))]
    pub phone: String,
    pub date: String,
    /// Time slot label
    pub time: String,
    #[validate(range(min = 1, message = "Guests must be at least 1"))]
    pub guests: i32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[validate(range(min = 1, max = 5, message = "Invalid table number"))]
    pub table_no: i32,
}

impl From<BookingForm> for BookingRequest {
    fn from(f: BookingForm) -> Self {
        BookingRequest {
            name: f.name,
            email: f.email,
            phone: f.phone,
            date: f.date,
            time_slot: f.time,
            guests: f.guests,
            table_no: f.table_no,
            category: f.category,
            subcategory: f.subcategory,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingPageView {
    pub page: &'static str,
    #[serde(flatten)]
    pub availability: Availability,
}
