pub mod admin;
pub mod auth;
pub mod booking;
pub mod feedback;
pub mod health;
pub mod history;
pub mod menu;
pub mod metrics;
pub mod pages;
pub mod payment;
pub mod request_id;
