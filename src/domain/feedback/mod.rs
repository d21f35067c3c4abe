//! Feedback and contact messages

pub mod model;
pub mod repository;

pub use model::{ContactMessage, Feedback, NewContactMessage, NewFeedback};
pub use repository::FeedbackRepository;
