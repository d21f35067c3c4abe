//! Food cart scoped to the booking held in the session

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::food_order::{cart_total, CartAction, CustomerOrder, FoodOrder};
use crate::domain::menu::{find_item, MenuCategory, MENU};
use crate::domain::{DomainResult, RepositoryProvider};

/// What the menu page shows
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub booking_id: i32,
    pub orders: Vec<FoodOrder>,
    pub total: i64,
    pub menu: &'static [MenuCategory],
}

pub struct CartService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CartService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn view(&self, booking_id: i32) -> DomainResult<CartView> {
        let orders = self.repos.food_orders().list_for_booking(booking_id).await?;
        Ok(CartView {
            booking_id,
            total: cart_total(&orders),
            orders,
            menu: MENU,
        })
    }

    /// Apply one cart mutation. Actions naming another booking's line
    /// match no rows and change nothing; items missing from the menu are
    /// ignored.
    pub async fn apply(&self, booking_id: i32, action: CartAction) -> DomainResult<()> {
        debug!(booking_id, ?action, "Applying cart action");

        let orders = self.repos.food_orders();
        match action {
            CartAction::Add { item_name } => match find_item(&item_name) {
                Some(item) => orders.add_item(booking_id, item.name, item.price).await,
                None => {
                    debug!(booking_id, item_name = %item_name, "Not on the menu");
                    Ok(())
                }
            },
            CartAction::Increase { order_id } => orders.increase(booking_id, order_id).await,
            CartAction::Decrease { order_id } => orders.decrease(booking_id, order_id).await,
            CartAction::Delete { order_id } => orders.delete(booking_id, order_id).await,
        }
    }

    /// Food orders across all bookings made with this email, newest first
    pub async fn my_orders(&self, email: &str) -> DomainResult<Vec<CustomerOrder>> {
        self.repos
            .food_orders()
            .list_for_email(&email.trim().to_lowercase())
            .await
    }
}
