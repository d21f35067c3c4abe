//! SeaORM implementation of FeedbackRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};

use super::db_err;
use crate::domain::feedback::{
    ContactMessage, Feedback, FeedbackRepository, NewContactMessage, NewFeedback,
};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{contact_message, feedback};

pub struct SeaOrmFeedbackRepository {
    db: DatabaseConnection,
}

impl SeaOrmFeedbackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn feedback_to_domain(m: feedback::Model) -> Feedback {
    Feedback {
        id: m.id,
        name: m.name,
        email: m.email,
        message: m.message,
        created_at: m.created_at,
    }
}

fn contact_to_domain(m: contact_message::Model) -> ContactMessage {
    ContactMessage {
        id: m.id,
        name: m.name,
        email: m.email,
        subject: m.subject,
        message: m.message,
        created_at: m.created_at,
    }
}

#[async_trait]
impl FeedbackRepository for SeaOrmFeedbackRepository {
    async fn create_feedback(&self, f: NewFeedback) -> DomainResult<Feedback> {
        debug!("Storing feedback from {}", f.email);

        let model = feedback::ActiveModel {
            name: Set(f.name),
            email: Set(f.email),
            message: Set(f.message),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        Ok(feedback_to_domain(saved))
    }

    async fn create_contact_message(
        &self,
        m: NewContactMessage,
    ) -> DomainResult<ContactMessage> {
        debug!("Storing contact message from {}", m.email);

        let model = contact_message::ActiveModel {
            name: Set(m.name),
            email: Set(m.email),
            subject: Set(m.subject),
            message: Set(m.message),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        Ok(contact_to_domain(saved))
    }

    async fn latest_feedback(&self, limit: u64) -> DomainResult<Vec<Feedback>> {
        let models = feedback::Entity::find()
            .order_by_desc(feedback::Column::CreatedAt)
            .order_by_desc(feedback::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(feedback_to_domain).collect())
    }
}
