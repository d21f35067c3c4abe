//! Feedback and contact-form submissions

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    ContactMessage, DomainError, DomainResult, Feedback, NewContactMessage, NewFeedback,
    RepositoryProvider,
};

fn any_blank(fields: &[&str]) -> bool {
    fields.iter().any(|f| f.trim().is_empty())
}

pub struct FeedbackService {
    repos: Arc<dyn RepositoryProvider>,
}

impl FeedbackService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn submit_feedback(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> DomainResult<Feedback> {
        if any_blank(&[name, email, message]) {
            return Err(DomainError::Validation("All fields are required.".into()));
        }

        let saved = self
            .repos
            .feedback()
            .create_feedback(NewFeedback {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                message: message.trim().to_string(),
            })
            .await?;
        info!(feedback_id = saved.id, "Feedback received");
        Ok(saved)
    }

    pub async fn submit_contact(
        &self,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> DomainResult<ContactMessage> {
        if any_blank(&[name, email, subject, message]) {
            return Err(DomainError::Validation("All fields are required!".into()));
        }

        let saved = self
            .repos
            .feedback()
            .create_contact_message(NewContactMessage {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                subject: subject.trim().to_string(),
                message: message.trim().to_string(),
            })
            .await?;
        info!(message_id = saved.id, "Contact message received");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_counts_as_blank() {
        assert!(any_blank(&["a", "  ", "c"]));
        assert!(!any_blank(&[" a ", "b"]));
    }
}
