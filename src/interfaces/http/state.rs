//! Shared router state
//!
//! Handlers take only the service they need (`State<Arc<BookingService>>`,
//! ...); `FromRef` projects it out of [`AppState`].

use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use super::modules::health::HealthState;
use crate::application::{
    AccountService, BookingService, CartService, DashboardService, FeedbackService,
    PaymentService,
};
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub bookings: Arc<BookingService>,
    pub cart: Arc<CartService>,
    pub payments: Arc<PaymentService>,
    pub dashboard: Arc<DashboardService>,
    pub feedback: Arc<FeedbackService>,
    pub health: HealthState,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &AppConfig) -> Self {
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let table_price = config.payment.table_price;

        Self {
            accounts: Arc::new(AccountService::new(
                repos.clone(),
                config.auth.bcrypt_cost,
                config.auth.allow_admin_signup,
            )),
            bookings: Arc::new(BookingService::new(repos.clone(), table_price)),
            cart: Arc::new(CartService::new(repos.clone())),
            payments: Arc::new(PaymentService::new(
                repos.clone(),
                config.payment.upi(),
                table_price,
            )),
            dashboard: Arc::new(DashboardService::new(repos.clone())),
            feedback: Arc::new(FeedbackService::new(repos)),
            health: HealthState::new(db),
        }
    }
}
