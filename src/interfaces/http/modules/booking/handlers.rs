//! Table booking handlers

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use tower_sessions::Session;

use super::dto::{AvailabilityQuery, BookingForm, BookingPageView};
use crate::application::BookingService;
use crate::interfaces::http::common::{into_page_error, ValidatedForm};
use crate::interfaces::http::session::{set_booking, BookingContext};

/// `GET /booking`: open slots and tables
pub async fn booking_page(
    State(bookings): State<Arc<BookingService>>,
    Query(query): Query<AvailabilityQuery>,
) -> Response {
    match bookings
        .availability(query.date.as_deref(), query.time.as_deref())
        .await
    {
        Ok(availability) => Json(BookingPageView {
            page: "booking",
            availability,
        })
        .into_response(),
        Err(e) => into_page_error(e),
    }
}

/// `POST /booking`: reserve a table, then continue to the table-fee payment
pub async fn submit_booking(
    State(bookings): State<Arc<BookingService>>,
    session: Session,
    ValidatedForm(form): ValidatedForm<BookingForm>,
) -> Response {
    let booking = match bookings.submit(form.into()).await {
        Ok(b) => b,
        Err(e) => return into_page_error(e),
    };

    set_booking(
        &session,
        BookingContext {
            booking_id: booking.id,
            customer_name: booking.name,
        },
    )
    .await;

    Redirect::to("/booking_payment").into_response()
}
