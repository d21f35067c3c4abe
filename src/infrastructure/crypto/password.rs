//! Password hashing utilities

use bcrypt::{hash, verify};

pub use bcrypt::DEFAULT_COST;

use crate::shared::errors::InfraError;

/// Hash a password using bcrypt with the given work factor
pub fn hash_password(password: &str, cost: u32) -> Result<String, InfraError> {
    hash(password, cost).map_err(|e| InfraError::Crypto(e.to_string()))
}

/// Verify a password against a hash
///
/// A malformed stored hash counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hashed = hash_password("secret123", 4).unwrap();
        assert_ne!(hashed, "secret123");
        assert!(verify_password("secret123", &hashed));
        assert!(!verify_password("secret124", &hashed));
    }

    #[test]
    fn garbage_hash_never_matches() {
        assert!(!verify_password("secret123", "not-a-bcrypt-hash"));
    }
}
