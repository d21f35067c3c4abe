//! Shared HTTP building blocks: response envelope, extractors, error mapping

pub mod api_response;
pub mod error;
pub mod extract;

pub use api_response::ApiResponse;
pub use error::{into_api_error, into_page_error};
pub use extract::{ApiJson, ApiJsonRejection, ValidatedForm, ValidatedFormRejection};
