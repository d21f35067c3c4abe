//! Cryptographic helpers

pub mod password;

pub use password::{hash_password, verify_password, DEFAULT_COST};
