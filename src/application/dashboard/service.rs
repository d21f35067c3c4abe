//! Admin dashboard aggregation
//!
//! Every figure is read independently; a failing query is logged and its
//! figure falls back to zero or an empty list.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use tracing::error;

use crate::domain::feedback::Feedback;
use crate::domain::food_order::{FoodOrderWithCustomer, TopItem};
use crate::domain::{Booking, DomainResult, RepositoryProvider, UserRole};

const TOP_ITEMS: u64 = 3;
const RECENT_FEEDBACK: u64 = 5;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardStats {
    pub total_customers: u64,
    pub total_bookings: u64,
    pub booking_revenue: i64,
    pub total_food_orders: u64,
    pub food_revenue: i64,
    pub total_revenue: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Dashboard {
    pub admin_name: String,
    pub stats: DashboardStats,
    pub bookings: Vec<Booking>,
    pub food_orders: Vec<FoodOrderWithCustomer>,
    pub top_items: Vec<TopItem>,
    pub recent_feedback: Vec<Feedback>,
}

async fn or_default<T: Default>(what: &str, fut: impl Future<Output = DomainResult<T>>) -> T {
    match fut.await {
        Ok(v) => v,
        Err(e) => {
            error!(query = what, error = %e, "Dashboard query failed");
            T::default()
        }
    }
}

pub struct DashboardService {
    repos: Arc<dyn RepositoryProvider>,
}

impl DashboardService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn load(&self, admin_name: &str) -> Dashboard {
        let users = self.repos.users();
        let bookings = self.repos.bookings();
        let orders = self.repos.food_orders();
        let feedback = self.repos.feedback();

        let booking_revenue = or_default("booking_revenue", bookings.total_amount()).await;
        let food_revenue = or_default("food_revenue", orders.paid_revenue()).await;

        let stats = DashboardStats {
            total_customers: or_default("customers", users.count_by_role(UserRole::Customer)).await,
            total_bookings: or_default("bookings", bookings.count()).await,
            booking_revenue,
            total_food_orders: or_default("food_orders", orders.count()).await,
            food_revenue,
            total_revenue: booking_revenue + food_revenue,
        };

        Dashboard {
            admin_name: admin_name.to_string(),
            stats,
            bookings: or_default("booking_list", bookings.list_all()).await,
            food_orders: or_default("food_order_list", orders.list_with_customers()).await,
            top_items: or_default("top_items", orders.top_items(TOP_ITEMS)).await,
            recent_feedback: or_default("feedback", feedback.latest_feedback(RECENT_FEEDBACK)).await,
        }
    }
}
