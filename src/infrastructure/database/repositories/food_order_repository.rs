//! SeaORM implementation of FoodOrderRepository
//!
//! Quantity changes are single UPDATE statements on the stored value, so two
//! concurrent clicks on the same line both land. Units counted in
//! `paid_quantity` are never removed by cart actions.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::sea_query::{Expr, Func, OnConflict, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use super::booking_repository::model_to_domain as booking_to_domain;
use super::db_err;
use crate::domain::food_order::{
    CustomerOrder, FoodOrder, FoodOrderRepository, FoodOrderWithCustomer, TopItem,
};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{booking, food_order};

pub struct SeaOrmFoodOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmFoodOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct TopItemRow {
    item_name: String,
    total_quantity: i64,
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: food_order::Model) -> FoodOrder {
    FoodOrder {
        id: m.id,
        booking_id: m.booking_id,
        item_name: m.item_name,
        item_price: m.item_price,
        quantity: m.quantity,
        paid_quantity: m.paid_quantity,
        paid: m.food_paid,
        created_at: m.created_at,
    }
}

fn owned_line(booking_id: i32, order_id: i32) -> sea_orm::Condition {
    sea_orm::Condition::all()
        .add(food_order::Column::Id.eq(order_id))
        .add(food_order::Column::BookingId.eq(booking_id))
}

/// Set the paid flag once no unit of the line is owed.
async fn settle_if_fully_paid(
    txn: &DatabaseTransaction,
    booking_id: i32,
    order_id: i32,
) -> DomainResult<()> {
    food_order::Entity::update_many()
        .col_expr(food_order::Column::FoodPaid, Expr::value(true))
        .filter(owned_line(booking_id, order_id))
        .filter(
            Expr::col(food_order::Column::Quantity)
                .lte(Expr::col(food_order::Column::PaidQuantity)),
        )
        .exec(txn)
        .await
        .map_err(db_err)?;
    Ok(())
}

// ── FoodOrderRepository impl ────────────────────────────────────

#[async_trait]
impl FoodOrderRepository for SeaOrmFoodOrderRepository {
    async fn list_for_booking(&self, booking_id: i32) -> DomainResult<Vec<FoodOrder>> {
        let models = food_order::Entity::find()
            .filter(food_order::Column::BookingId.eq(booking_id))
            .order_by_asc(food_order::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn add_item(
        &self,
        booking_id: i32,
        item_name: &str,
        item_price: i64,
    ) -> DomainResult<()> {
        debug!("Adding {} to booking {}", item_name, booking_id);

        let line = food_order::ActiveModel {
            booking_id: Set(booking_id),
            item_name: Set(item_name.to_string()),
            item_price: Set(item_price),
            quantity: Set(1),
            paid_quantity: Set(0),
            food_paid: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        // An existing line gets one more unit, which is owed until the next payment.
        food_order::Entity::insert(line)
            .on_conflict(
                OnConflict::columns([food_order::Column::BookingId, food_order::Column::ItemName])
                    .value(
                        food_order::Column::Quantity,
                        Expr::col(food_order::Column::Quantity).add(1),
                    )
                    .value(food_order::Column::FoodPaid, Expr::value(false))
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn increase(&self, booking_id: i32, order_id: i32) -> DomainResult<()> {
        food_order::Entity::update_many()
            .col_expr(
                food_order::Column::Quantity,
                Expr::col(food_order::Column::Quantity).add(1),
            )
            .col_expr(food_order::Column::FoodPaid, Expr::value(false))
            .filter(owned_line(booking_id, order_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn decrease(&self, booking_id: i32, order_id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let removed = food_order::Entity::delete_many()
            .filter(owned_line(booking_id, order_id))
            .filter(food_order::Column::Quantity.lte(1))
            .filter(food_order::Column::PaidQuantity.eq(0))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if removed.rows_affected == 0 {
            food_order::Entity::update_many()
                .col_expr(
                    food_order::Column::Quantity,
                    Expr::col(food_order::Column::Quantity).sub(1),
                )
                .filter(owned_line(booking_id, order_id))
                .filter(food_order::Column::Quantity.gt(1))
                .filter(
                    Expr::col(food_order::Column::Quantity)
                        .gt(Expr::col(food_order::Column::PaidQuantity)),
                )
                .exec(&txn)
                .await
                .map_err(db_err)?;
            settle_if_fully_paid(&txn, booking_id, order_id).await?;
        }

        txn.commit().await.map_err(db_err)
    }

    async fn delete(&self, booking_id: i32, order_id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let removed = food_order::Entity::delete_many()
            .filter(owned_line(booking_id, order_id))
            .filter(food_order::Column::PaidQuantity.eq(0))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        // A line with paid units only drops what is still owed.
        if removed.rows_affected == 0 {
            food_order::Entity::update_many()
                .col_expr(
                    food_order::Column::Quantity,
                    Expr::col(food_order::Column::PaidQuantity).into(),
                )
                .col_expr(food_order::Column::FoodPaid, Expr::value(true))
                .filter(owned_line(booking_id, order_id))
                .exec(&txn)
                .await
                .map_err(db_err)?;
        }

        txn.commit().await.map_err(db_err)
    }

    async fn mark_paid_for_booking(&self, booking_id: i32) -> DomainResult<u64> {
        debug!("Marking food orders of booking {} as paid", booking_id);

        let result = food_order::Entity::update_many()
            .col_expr(
                food_order::Column::PaidQuantity,
                Expr::col(food_order::Column::Quantity).into(),
            )
            .col_expr(food_order::Column::FoodPaid, Expr::value(true))
            .filter(food_order::Column::BookingId.eq(booking_id))
            .filter(food_order::Column::FoodPaid.eq(false))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        food_order::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn paid_revenue(&self) -> DomainResult<i64> {
        let paid_total = Expr::col(food_order::Column::ItemPrice)
            .mul(Expr::col(food_order::Column::PaidQuantity));

        let total: Option<Option<i64>> = food_order::Entity::find()
            .select_only()
            .column_as(SimpleExpr::FunctionCall(Func::sum(paid_total)), "revenue")
            .filter(food_order::Column::PaidQuantity.gt(0))
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(total.flatten().unwrap_or(0))
    }

    async fn list_with_customers(&self) -> DomainResult<Vec<FoodOrderWithCustomer>> {
        let rows = food_order::Entity::find()
            .find_also_related(booking::Entity)
            .order_by_desc(food_order::Column::CreatedAt)
            .order_by_desc(food_order::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|(order, booking)| {
                let (customer_name, customer_email) = booking
                    .map(|b| (b.name, b.email))
                    .unwrap_or_default();
                FoodOrderWithCustomer {
                    order: model_to_domain(order),
                    customer_name,
                    customer_email,
                }
            })
            .collect())
    }

    async fn top_items(&self, limit: u64) -> DomainResult<Vec<TopItem>> {
        let rows = food_order::Entity::find()
            .select_only()
            .column(food_order::Column::ItemName)
            .column_as(food_order::Column::Quantity.sum(), "total_quantity")
            .group_by(food_order::Column::ItemName)
            .order_by_desc(food_order::Column::Quantity.sum())
            .order_by_asc(food_order::Column::ItemName)
            .limit(limit)
            .into_model::<TopItemRow>()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|r| TopItem {
                item_name: r.item_name,
                total_quantity: r.total_quantity,
            })
            .collect())
    }

    async fn list_for_email(&self, email: &str) -> DomainResult<Vec<CustomerOrder>> {
        let rows = food_order::Entity::find()
            .find_also_related(booking::Entity)
            .filter(booking::Column::Email.eq(email))
            .order_by_desc(food_order::Column::CreatedAt)
            .order_by_desc(food_order::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .filter_map(|(order, booking)| {
                let booking = booking_to_domain(booking?);
                let order = model_to_domain(order);
                Some(CustomerOrder {
                    order_id: order.id,
                    total_amount: order.line_total(),
                    item_name: order.item_name,
                    item_price: order.item_price,
                    quantity: order.quantity,
                    paid: order.paid,
                    created_at: order.created_at,
                    booking_id: booking.id,
                    date: booking.date,
                    time_slot: booking.time_slot,
                    table_no: booking.table_no,
                    booking_status: booking.status.as_str().to_string(),
                    booking_total: booking.total_amount,
                })
            })
            .collect())
    }
}
