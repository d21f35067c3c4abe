//! `DomainError` → HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::ApiResponse;
use crate::domain::DomainError;

fn status_of(e: &DomainError) -> StatusCode {
    match e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_if_internal(e: &DomainError) {
    if let DomainError::Storage(detail) = e {
        error!(error = %detail, "Storage failure");
    }
}

/// JSON API failure: `{success: false, message}`
pub fn into_api_error(e: DomainError) -> (StatusCode, Json<ApiResponse>) {
    log_if_internal(&e);
    (status_of(&e), Json(ApiResponse::error(e.public_message())))
}

/// Form page failure: plain text body
pub fn into_page_error(e: DomainError) -> Response {
    log_if_internal(&e);
    (status_of(&e), e.public_message()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_409() {
        let resp = into_page_error(DomainError::Conflict("taken".into()));
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn storage_is_masked() {
        let (status, Json(body)) = into_api_error(DomainError::Storage("locked".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message.as_deref(), Some("Server error"));
    }
}
