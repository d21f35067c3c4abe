//! Account API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Redirect, Json};
use tower_sessions::Session;
use tracing::error;

use super::dto::{LoginRequest, RegisterRequest};
use crate::application::AccountService;
use crate::domain::DomainError;
use crate::interfaces::http::common::{into_api_error, ApiJson, ApiResponse};
use crate::interfaces::http::session::{sign_in, sign_out, SessionUser};

type ApiResult = Result<Json<ApiResponse>, (StatusCode, Json<ApiResponse>)>;

#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = ApiResponse),
        (status = 400, description = "Invalid field, or username/email taken", body = ApiResponse),
        (status = 500, description = "Server error", body = ApiResponse)
    )
)]
pub async fn register(
    State(accounts): State<Arc<AccountService>>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> ApiResult {
    accounts
        .register(request.into())
        .await
        .map_err(|e| match e {
            // The form reports duplicates as a plain bad request
            DomainError::Conflict(msg) => (StatusCode::BAD_REQUEST, Json(ApiResponse::error(msg))),
            other => into_api_error(other),
        })?;

    Ok(Json(ApiResponse::message("User registered successfully!")))
}

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = ApiResponse),
        (status = 400, description = "Email or password missing", body = ApiResponse),
        (status = 401, description = "Invalid email or password", body = ApiResponse),
        (status = 500, description = "Server error", body = ApiResponse)
    )
)]
pub async fn login(
    State(accounts): State<Arc<AccountService>>,
    session: Session,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult {
    let user = accounts
        .login(&request.email, &request.password)
        .await
        .map_err(into_api_error)?;

    sign_in(&session, SessionUser::from(&user))
        .await
        .map_err(|e| {
            error!(user_id = user.id, error = %e, "Failed to store session");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Server error")),
            )
        })?;

    Ok(Json(ApiResponse::role(user.role.as_str())))
}

/// `GET /logout`
pub async fn logout(session: Session) -> Redirect {
    sign_out(&session).await;
    Redirect::to("/")
}
