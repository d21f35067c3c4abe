//! Infrastructure layer - external concerns

pub mod crypto;
pub mod database;
pub mod payment;

pub use database::{init_database, DatabaseConfig};
pub use payment::{UpiConfig, UpiPayment};
