//! JSON envelope of the account API: `{success, message}` or `{success, role}`

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    /// `true` if the request succeeded
    pub success: bool,
    /// Human-readable outcome, always present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Role of the user who just logged in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl ApiResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            role: None,
        }
    }

    pub fn role(role: impl Into<String>) -> Self {
        Self {
            success: true,
            message: None,
            role: Some(role.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            role: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let json = serde_json::to_value(ApiResponse::role("admin")).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "role": "admin"}));

        let json = serde_json::to_value(ApiResponse::error("Invalid email")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "Invalid email"})
        );
    }
}
