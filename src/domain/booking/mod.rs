//! Booking aggregate
//!
//! Contains the Booking entity, the slot/table catalogs, and repository interface.

pub mod catalog;
pub mod model;
pub mod repository;

pub use catalog::{available_slots, available_tables, is_known_slot, is_known_table, TABLES, TIME_SLOTS};
pub use model::{Booking, BookingStatus, NewBooking, SLOT_TAKEN_MESSAGE};
pub use repository::BookingRepository;
