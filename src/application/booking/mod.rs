//! Table booking use-cases

pub mod service;

pub use service::{parse_date, Availability, BookingRequest, BookingService};
