//! Simulated UPI payment for the table fee and the food bill
//!
//! Confirmation is trusted: there is no callback from a payment provider.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::food_order::{amount_due, FoodOrder};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::payment::UpiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Booking,
    Food,
}

/// Shared view model of both payment pages
#[derive(Debug, Clone, Serialize)]
pub struct PaymentView {
    pub payment_type: PaymentType,
    pub booking_id: i32,
    pub total_price: i64,
    pub customer_name: String,
    pub qr_link: String,
    pub upi_uri: String,
    pub food_orders: Vec<FoodOrder>,
}

impl PaymentView {
    /// Confirmation is only offered for a non-zero amount.
    pub fn can_confirm(&self) -> bool {
        self.total_price > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodPaymentOutcome {
    Paid { lines: u64, amount: i64 },
    NothingToPay,
}

pub struct PaymentService {
    repos: Arc<dyn RepositoryProvider>,
    upi: UpiConfig,
    table_price: i64,
}

impl PaymentService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, upi: UpiConfig, table_price: i64) -> Self {
        Self {
            repos,
            upi,
            table_price,
        }
    }

    fn render(
        &self,
        payment_type: PaymentType,
        booking_id: i32,
        customer_name: String,
        total_price: i64,
        food_orders: Vec<FoodOrder>,
    ) -> DomainResult<PaymentView> {
        let payment = self.upi.payment(total_price)?;
        Ok(PaymentView {
            payment_type,
            booking_id,
            total_price,
            customer_name,
            qr_link: payment.qr_link,
            upi_uri: payment.upi_uri,
            food_orders,
        })
    }

    async fn require_booking(&self, booking_id: i32) -> DomainResult<crate::domain::Booking> {
        self.repos
            .bookings()
            .find_by_id(booking_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: booking_id.to_string(),
            })
    }

    // ── Table fee ───────────────────────────────────────────────

    pub async fn booking_payment(&self, booking_id: i32) -> DomainResult<PaymentView> {
        let booking = self.require_booking(booking_id).await?;
        self.render(
            PaymentType::Booking,
            booking.id,
            booking.name,
            self.table_price,
            Vec::new(),
        )
    }

    pub async fn confirm_booking_payment(&self, booking_id: i32) -> DomainResult<()> {
        self.repos.bookings().mark_paid(booking_id).await?;
        info!(booking_id, amount = self.table_price, "Booking payment confirmed");
        Ok(())
    }

    // ── Food bill ───────────────────────────────────────────────

    async fn unpaid_lines(&self, booking_id: i32) -> DomainResult<Vec<FoodOrder>> {
        let lines = self.repos.food_orders().list_for_booking(booking_id).await?;
        Ok(lines.into_iter().filter(|o| o.unpaid_quantity() > 0).collect())
    }

    /// Total over the booking's unpaid units
    pub async fn food_payment(&self, booking_id: i32) -> DomainResult<PaymentView> {
        let booking = self.require_booking(booking_id).await?;
        let unpaid = self.unpaid_lines(booking_id).await?;
        let total = amount_due(&unpaid);
        self.render(PaymentType::Food, booking.id, booking.name, total, unpaid)
    }

    /// Settle every owed unit of the booking, unless nothing is owed.
    pub async fn confirm_food_payment(&self, booking_id: i32) -> DomainResult<FoodPaymentOutcome> {
        let amount = amount_due(&self.unpaid_lines(booking_id).await?);
        if amount <= 0 {
            return Ok(FoodPaymentOutcome::NothingToPay);
        }

        let lines = self
            .repos
            .food_orders()
            .mark_paid_for_booking(booking_id)
            .await?;
        info!(booking_id, amount, lines, "Food payment confirmed");
        Ok(FoodPaymentOutcome::Paid { lines, amount })
    }
}
