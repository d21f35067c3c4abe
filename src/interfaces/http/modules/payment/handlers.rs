//! Table-fee and food-bill payment pages

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use tracing::debug;

use crate::application::{FoodPaymentOutcome, PaymentService};
use crate::domain::DomainError;
use crate::interfaces::http::common::into_page_error;
use crate::interfaces::http::session::ActiveBooking;

/// A booking id from a stale session sends the user back to booking.
fn payment_error(e: DomainError) -> Response {
    match e {
        DomainError::NotFound { .. } => Redirect::to("/booking").into_response(),
        other => into_page_error(other),
    }
}

/// `GET /booking_payment`
pub async fn booking_payment(
    State(payments): State<Arc<PaymentService>>,
    ActiveBooking(ctx): ActiveBooking,
) -> Response {
    match payments.booking_payment(ctx.booking_id).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => payment_error(e),
    }
}

/// `POST /booking_payment`: confirm the table fee
pub async fn confirm_booking_payment(
    State(payments): State<Arc<PaymentService>>,
    ActiveBooking(ctx): ActiveBooking,
) -> Response {
    match payments.confirm_booking_payment(ctx.booking_id).await {
        Ok(()) => Redirect::to("/menu").into_response(),
        Err(e) => payment_error(e),
    }
}

/// `GET /food_payment`
pub async fn food_payment(
    State(payments): State<Arc<PaymentService>>,
    ActiveBooking(ctx): ActiveBooking,
) -> Response {
    match payments.food_payment(ctx.booking_id).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => payment_error(e),
    }
}

/// `POST /food_payment`: confirm the food bill; an empty bill re-renders the page
pub async fn confirm_food_payment(
    State(payments): State<Arc<PaymentService>>,
    ActiveBooking(ctx): ActiveBooking,
) -> Response {
    match payments.confirm_food_payment(ctx.booking_id).await {
        Ok(FoodPaymentOutcome::Paid { .. }) => Redirect::to("/order_success").into_response(),
        Ok(FoodPaymentOutcome::NothingToPay) => {
            debug!(booking_id = ctx.booking_id, "Nothing to pay");
            food_payment(State(payments), ActiveBooking(ctx)).await
        }
        Err(e) => payment_error(e),
    }
}
