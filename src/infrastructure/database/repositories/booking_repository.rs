//! SeaORM implementation of BookingRepository

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{db_err, is_unique_violation};
use crate::domain::booking::{
    Booking, BookingRepository, BookingStatus, NewBooking, SLOT_TAKEN_MESSAGE,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::booking;

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn model_to_domain(m: booking::Model) -> Booking {
    Booking {
        id: m.id,
        name: m.name,
        email: m.email,
        phone: m.phone,
        date: m.date,
        time_slot: m.time_slot,
        guests: m.guests,
        table_no: m.table_no,
        category: m.category,
        subcategory: m.subcategory,
        status: BookingStatus::parse(&m.status),
        total_amount: m.total_amount,
        created_at: m.created_at,
    }
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn create(&self, b: NewBooking) -> DomainResult<Booking> {
        debug!(
            "Creating booking: {} {} table {}",
            b.date, b.time_slot, b.table_no
        );

        let model = booking::ActiveModel {
            name: Set(b.name),
            email: Set(b.email),
            phone: Set(b.phone),
            date: Set(b.date),
            time_slot: Set(b.time_slot),
            guests: Set(b.guests),
            table_no: Set(b.table_no),
            category: Set(b.category),
            subcategory: Set(b.subcategory),
            status: Set(BookingStatus::Pending.as_str().to_string()),
            total_amount: Set(b.total_amount),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let saved = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::Conflict(SLOT_TAKEN_MESSAGE.to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(model_to_domain(saved))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>> {
        let model = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn is_taken(
        &self,
        date: NaiveDate,
        time_slot: &str,
        table_no: i32,
    ) -> DomainResult<bool> {
        let n = booking::Entity::find()
            .filter(booking::Column::Date.eq(date))
            .filter(booking::Column::TimeSlot.eq(time_slot))
            .filter(booking::Column::TableNo.eq(table_no))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(n > 0)
    }

    async fn booked_counts_by_slot(&self, date: NaiveDate) -> DomainResult<Vec<(String, u64)>> {
        let rows: Vec<(String, i64)> = booking::Entity::find()
            .select_only()
            .column(booking::Column::TimeSlot)
            .column_as(booking::Column::Id.count(), "booked")
            .filter(booking::Column::Date.eq(date))
            .group_by(booking::Column::TimeSlot)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|(slot, n)| (slot, n.max(0) as u64))
            .collect())
    }

    async fn booked_tables(&self, date: NaiveDate, time_slot: &str) -> DomainResult<Vec<i32>> {
        booking::Entity::find()
            .select_only()
            .column(booking::Column::TableNo)
            .filter(booking::Column::Date.eq(date))
            .filter(booking::Column::TimeSlot.eq(time_slot))
            .order_by_asc(booking::Column::TableNo)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn mark_paid(&self, id: i32) -> DomainResult<()> {
        debug!("Marking booking {} as paid", id);

        let result = booking::Entity::update_many()
            .col_expr(
                booking::Column::Status,
                Expr::value(BookingStatus::Paid.as_str()),
            )
            .filter(booking::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }

    async fn list_all(&self) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .order_by_desc(booking::Column::Date)
            .order_by_desc(booking::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn list_paid_for_email(&self, email: &str) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(booking::Column::Email.eq(email))
            .filter(booking::Column::Status.eq(BookingStatus::Paid.as_str()))
            .order_by_desc(booking::Column::Date)
            .order_by_desc(booking::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        booking::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn total_amount(&self) -> DomainResult<i64> {
        let total: Option<Option<i64>> = booking::Entity::find()
            .select_only()
            .column_as(booking::Column::TotalAmount.sum(), "total")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(total.flatten().unwrap_or(0))
    }
}
