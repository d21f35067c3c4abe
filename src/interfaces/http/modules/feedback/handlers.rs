//! Feedback and contact forms
//!
//! Outcomes are reported inline on the page with a 200, like the form
//! pages they back.

use std::sync::Arc;

use axum::extract::State;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::application::FeedbackService;
use crate::domain::DomainError;

const GENERIC_FAILURE: &str = "Something went wrong. Try again.";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Default, Serialize)]
pub struct FormView {
    pub page: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FormView {
    fn outcome<T>(page: &'static str, result: Result<T, DomainError>, ok: &str) -> Self {
        match result {
            Ok(_) => Self {
                page,
                success: Some(ok.to_string()),
                error: None,
            },
            Err(DomainError::Validation(msg)) => Self {
                page,
                success: None,
                error: Some(msg),
            },
            Err(e) => {
                error!(page, error = %e, "Form submission failed");
                Self {
                    page,
                    success: None,
                    error: Some(GENERIC_FAILURE.to_string()),
                }
            }
        }
    }
}

pub async fn feedback_page() -> Json<FormView> {
    Json(FormView {
        page: "feedback",
        ..Default::default()
    })
}

pub async fn submit_feedback(
    State(feedback): State<Arc<FeedbackService>>,
    Form(form): Form<FeedbackForm>,
) -> Json<FormView> {
    let result = feedback
        .submit_feedback(&form.name, &form.email, &form.message)
        .await;
    Json(FormView::outcome(
        "feedback",
        result,
        "Thank you for your feedback!",
    ))
}

pub async fn contact_page() -> Json<FormView> {
    Json(FormView {
        page: "contact",
        ..Default::default()
    })
}

pub async fn submit_contact(
    State(feedback): State<Arc<FeedbackService>>,
    Form(form): Form<ContactForm>,
) -> Json<FormView> {
    let result = feedback
        .submit_contact(&form.name, &form.email, &form.subject, &form.message)
        .await;
    Json(FormView::outcome(
        "contact",
        result,
        "Your message has been sent successfully!",
    ))
}
