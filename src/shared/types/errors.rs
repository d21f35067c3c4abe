use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Storage failures are never shown to the user verbatim.
    pub fn public_message(&self) -> String {
        match self {
            DomainError::Storage(_) => "Server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("QR encoding error: {0}")]
    Qr(String),
}

impl From<InfraError> for DomainError {
    fn from(e: InfraError) -> Self {
        DomainError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_are_masked() {
        let e = DomainError::Storage("disk I/O error".into());
        assert_eq!(e.public_message(), "Server error");
    }

    #[test]
    fn validation_message_is_passed_through() {
        let e = DomainError::Validation("Invalid phone".into());
        assert_eq!(e.public_message(), "Invalid phone");
    }
}
