//! # SwiftCafe
//!
//! Café table booking and food ordering over HTTP.
//!
//! - **domain**: entities, menu catalog and repository traits
//! - **application**: services for accounts, booking, cart, payment, dashboard, feedback
//! - **infrastructure**: SeaORM persistence, password hashing, UPI QR payments
//! - **interfaces**: axum router, session handling and handlers
//! - **server**: process lifecycle shared by both binaries

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};
pub use interfaces::http::{create_router, AppState};
