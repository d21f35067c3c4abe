//! Food order (cart line) domain entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// One cart line: a menu item ordered against a booking.
///
/// `paid_quantity` of the `quantity` units are settled; `paid` is set once
/// every unit is.
#[derive(Debug, Clone, Serialize)]
pub struct FoodOrder {
    pub id: i32,
    pub booking_id: i32,
    pub item_name: String,
    /// Unit price in rupees
    pub item_price: i64,
    pub quantity: i32,
    pub paid_quantity: i32,
    pub paid: bool,
    pub created_at: DateTime<Utc>,
}

impl FoodOrder {
    pub fn line_total(&self) -> i64 {
        self.item_price * i64::from(self.quantity)
    }

    pub fn unpaid_quantity(&self) -> i32 {
        (self.quantity - self.paid_quantity).max(0)
    }

    /// Price of the units not yet paid for
    pub fn amount_due(&self) -> i64 {
        self.item_price * i64::from(self.unpaid_quantity())
    }
}

/// Σ(price × quantity) over the given lines.
pub fn cart_total(orders: &[FoodOrder]) -> i64 {
    orders.iter().map(FoodOrder::line_total).sum()
}

/// Σ(price × unpaid quantity) over the given lines.
pub fn amount_due(orders: &[FoodOrder]) -> i64 {
    orders.iter().map(FoodOrder::amount_due).sum()
}

/// A mutation requested from the menu page.
///
/// `Add` names a menu item; its price is looked up in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Add { item_name: String },
    Increase { order_id: i32 },
    Decrease { order_id: i32 },
    Delete { order_id: i32 },
}

impl CartAction {
    /// Build an action from raw form fields.
    ///
    /// Returns `None` for unknown actions or when the fields the action
    /// needs are missing or malformed.
    pub fn parse(action: &str, order_id: Option<&str>, item_name: Option<&str>) -> Option<Self> {
        let order_id = || order_id.and_then(|v| v.trim().parse::<i32>().ok());

        match action {
            "add" => item_name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(|n| Self::Add {
                    item_name: n.to_string(),
                }),
            "increase" => order_id().map(|order_id| Self::Increase { order_id }),
            "decrease" => order_id().map(|order_id| Self::Decrease { order_id }),
            "delete" => order_id().map(|order_id| Self::Delete { order_id }),
            _ => None,
        }
    }
}

/// Admin view of an order line with the booking's customer.
#[derive(Debug, Clone, Serialize)]
pub struct FoodOrderWithCustomer {
    #[serde(flatten)]
    pub order: FoodOrder,
    pub customer_name: String,
    pub customer_email: String,
}

/// Customer history view of an order line with its booking.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerOrder {
    pub order_id: i32,
    pub item_name: String,
    pub item_price: i64,
    pub quantity: i32,
    pub total_amount: i64,
    pub paid: bool,
    pub created_at: DateTime<Utc>,
    pub booking_id: i32,
    pub date: NaiveDate,
    pub time_slot: String,
    pub table_no: i32,
    pub booking_status: String,
    pub booking_total: i64,
}

/// Quantity ordered per item across all bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopItem {
    pub item_name: String,
    pub total_quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(price: i64, quantity: i32, paid_quantity: i32) -> FoodOrder {
        FoodOrder {
            id: 1,
            booking_id: 1,
            item_name: "Coke".into(),
            item_price: price,
            quantity,
            paid_quantity,
            paid: paid_quantity >= quantity,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn total_is_sum_of_lines() {
        let orders = vec![order(50, 2, 0), order(250, 1, 0), order(90, 3, 0)];
        assert_eq!(cart_total(&orders), 100 + 250 + 270);
        assert_eq!(cart_total(&[]), 0);
    }

    #[test]
    fn amount_due_skips_paid_units() {
        let orders = vec![order(50, 3, 2), order(120, 1, 1), order(90, 2, 0)];
        assert_eq!(amount_due(&orders), 50 + 180);
        assert_eq!(cart_total(&orders), 150 + 120 + 180);
        assert_eq!(orders[1].unpaid_quantity(), 0);
    }

    #[test]
    fn parse_add() {
        assert_eq!(
            CartAction::parse("add", None, Some(" Coke ")),
            Some(CartAction::Add {
                item_name: "Coke".into()
            })
        );
        assert_eq!(CartAction::parse("add", None, None), None);
        assert_eq!(CartAction::parse("add", None, Some("  ")), None);
    }

    #[test]
    fn parse_order_actions() {
        assert_eq!(
            CartAction::parse("increase", Some("7"), None),
            Some(CartAction::Increase { order_id: 7 })
        );
        assert_eq!(
            CartAction::parse("decrease", Some("7"), None),
            Some(CartAction::Decrease { order_id: 7 })
        );
        assert_eq!(
            CartAction::parse("delete", Some("7"), None),
            Some(CartAction::Delete { order_id: 7 })
        );
        assert_eq!(CartAction::parse("delete", None, None), None);
        assert_eq!(CartAction::parse("delete", Some("x"), None), None);
        assert_eq!(CartAction::parse("refund", Some("7"), None), None);
    }
}
