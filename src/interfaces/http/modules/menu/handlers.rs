//! Menu and food cart

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Deserialize;
use tracing::{debug, error};

use crate::application::CartService;
use crate::domain::CartAction;
use crate::interfaces::http::common::into_page_error;
use crate::interfaces::http::session::ActiveBooking;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CartForm {
    pub action: String,
    pub order_id: Option<String>,
    pub item_name: Option<String>,
}

/// `GET /menu`
pub async fn menu(
    State(cart): State<Arc<CartService>>,
    ActiveBooking(ctx): ActiveBooking,
) -> Response {
    match cart.view(ctx.booking_id).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => into_page_error(e),
    }
}

/// `POST /menu`: always lands back on the menu
pub async fn update_cart(
    State(cart): State<Arc<CartService>>,
    ActiveBooking(ctx): ActiveBooking,
    Form(form): Form<CartForm>,
) -> Redirect {
    let action = CartAction::parse(
        form.action.trim(),
        form.order_id.as_deref(),
        form.item_name.as_deref(),
    );

    match action {
        Some(action) => {
            if let Err(e) = cart.apply(ctx.booking_id, action).await {
                error!(booking_id = ctx.booking_id, error = %e, "Cart update failed");
            }
        }
        None => debug!(booking_id = ctx.booking_id, action = %form.action, "Ignoring cart request"),
    }

    Redirect::to("/menu")
}
