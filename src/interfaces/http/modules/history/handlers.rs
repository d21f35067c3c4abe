//! Customer booking and order history

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::{BookingService, CartService};
use crate::domain::food_order::CustomerOrder;
use crate::domain::Booking;
use crate::interfaces::http::common::into_page_error;
use crate::interfaces::http::session::{Customer, LoggedIn};

#[derive(Debug, Serialize)]
pub struct MyBookingsView {
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Serialize)]
pub struct MyOrdersView {
    pub orders: Vec<CustomerOrder>,
}

/// `GET /my_bookings`: paid bookings only
pub async fn my_bookings(
    State(bookings): State<Arc<BookingService>>,
    Customer(user): Customer,
) -> Response {
    match bookings.my_bookings(&user.email).await {
        Ok(bookings) => Json(MyBookingsView { bookings }).into_response(),
        Err(e) => into_page_error(e),
    }
}

/// `GET /my_orders`
pub async fn my_orders(
    State(cart): State<Arc<CartService>>,
    LoggedIn(user): LoggedIn,
) -> Response {
    match cart.my_orders(&user.email).await {
        Ok(orders) => Json(MyOrdersView { orders }).into_response(),
        Err(e) => into_page_error(e),
    }
}
