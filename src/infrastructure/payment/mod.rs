//! Simulated UPI payment: payment URI and its QR rendering

pub mod upi;

pub use upi::{UpiConfig, UpiPayment};
