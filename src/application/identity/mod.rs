//! Identity module: registration and authentication
//!
//! Contains the `AccountService` which orchestrates account use-cases:
//! registration, login and the bootstrap admin.

pub mod service;

pub use service::{AccountService, AdminSeed, Registration, MIN_PASSWORD_LEN};
