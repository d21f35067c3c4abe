//! Request extractors
//!
//! `ApiJson<T>` works like `axum::Json<T>` but rejects with the account API
//! envelope. `ValidatedForm<T>` works like `axum::Form<T>` and additionally
//! runs `validator::Validate::validate()` on the deserialized value; both of
//! its failures are plain-text 400 responses.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::ApiResponse;

// ── ApiJson ─────────────────────────────────────────────────────

pub struct ApiJson<T>(pub T);

pub struct ApiJsonRejection(JsonRejection);

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        let body = ApiResponse::error(format!("Invalid JSON: {}", self.0.body_text()));
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ApiJsonRejection)?;
        Ok(ApiJson(value))
    }
}

// ── ValidatedForm ───────────────────────────────────────────────

/// An extractor that deserializes a urlencoded form and validates it.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Feedback {
///     #[validate(length(min = 1, message = "Name is required"))]
///     name: String,
/// }
///
/// async fn handler(ValidatedForm(form): ValidatedForm<Feedback>) {}
/// ```
pub struct ValidatedForm<T>(pub T);

pub enum ValidatedFormRejection {
    FormError(FormRejection),
    ValidationError(validator::ValidationErrors),
}

/// First message of the alphabetically first failing field, so the
/// response does not depend on hash ordering.
fn first_message(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field))
            })
        })
        .next()
        .unwrap_or_else(|| "Validation failed".to_string())
}

impl IntoResponse for ValidatedFormRejection {
    fn into_response(self) -> Response {
        match self {
            Self::FormError(rejection) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid form data: {}", rejection.body_text()),
            )
                .into_response(),
            Self::ValidationError(errors) => {
                (StatusCode::BAD_REQUEST, first_message(&errors)).into_response()
            }
        }
    }
}

impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedFormRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(ValidatedFormRejection::FormError)?;

        value
            .validate()
            .map_err(ValidatedFormRejection::ValidationError)?;

        Ok(ValidatedForm(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
