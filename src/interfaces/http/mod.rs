//! HTTP interface
//!
//! - `router`: routes, middleware stack and Swagger UI
//! - `state`: shared services handed to handlers
//! - `session`: cookie session payloads and role extractors
//! - `modules`: handlers grouped by feature
//! - `common`: response envelope, extractors and error mapping

pub mod common;
pub mod modules;
pub mod router;
pub mod session;
pub mod state;

pub use router::{create_router, ApiDoc};
pub use state::AppState;
