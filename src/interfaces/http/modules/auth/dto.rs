//! Account API DTOs
//!
//! Every field defaults to empty so a missing field is reported by the
//! registration checks rather than as a JSON error.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::application::Registration;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// `customer` (default) or `admin`
    pub role: String,
    pub password: String,
}

impl From<RegisterRequest> for Registration {
    fn from(r: RegisterRequest) -> Self {
        Registration {
            username: r.username,
            name: r.full_name,
            email: r.email,
            phone: r.phone,
            role: r.role,
            password: r.password,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
