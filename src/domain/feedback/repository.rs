use async_trait::async_trait;

use super::model::{ContactMessage, Feedback, NewContactMessage, NewFeedback};
use crate::domain::DomainResult;

/// Append-only store for feedback and contact-form messages
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn create_feedback(&self, feedback: NewFeedback) -> DomainResult<Feedback>;

    async fn create_contact_message(&self, message: NewContactMessage)
        -> DomainResult<ContactMessage>;

    /// Most recent feedback first
    async fn latest_feedback(&self, limit: u64) -> DomainResult<Vec<Feedback>>;
}
