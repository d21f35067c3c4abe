//! Account service: registration, login and admin seeding
//!
//! HTTP handlers are thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{CreateUserDto, DomainError, DomainResult, RepositoryProvider, User, UserRole};
use crate::infrastructure::crypto::{hash_password, verify_password};
use crate::shared::validations::{is_valid_email, is_valid_name, is_valid_phone, is_valid_username};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw registration input, as submitted
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Empty means customer
    pub role: String,
    pub password: String,
}

impl Registration {
    /// Trim every field and lower-case the email.
    fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
            role: self.role.trim().to_lowercase(),
            password: self.password,
        }
    }

    /// Field checks in the order the registration form reports them.
    fn validate(&self) -> DomainResult<UserRole> {
        let required = [
            &self.username,
            &self.name,
            &self.email,
            &self.phone,
            &self.password,
        ];
        if required.iter().any(|f| f.is_empty()) {
            return Err(DomainError::Validation("All fields are required".into()));
        }
        if !is_valid_username(&self.username) {
            return Err(DomainError::Validation("Invalid username".into()));
        }
        if !is_valid_name(&self.name) {
            return Err(DomainError::Validation("Invalid name".into()));
        }
        if !is_valid_email(&self.email) {
            return Err(DomainError::Validation("Invalid email".into()));
        }
        if !is_valid_phone(&self.phone) {
            return Err(DomainError::Validation("Invalid phone".into()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::Validation("Password too short".into()));
        }
        if self.role.is_empty() {
            return Ok(UserRole::Customer);
        }
        UserRole::parse(&self.role).ok_or_else(|| DomainError::Validation("Invalid role".into()))
    }
}

/// Bootstrap admin account
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Account service: orchestrates the identity use-cases.
pub struct AccountService {
    repos: Arc<dyn RepositoryProvider>,
    bcrypt_cost: u32,
    allow_admin_signup: bool,
}

impl AccountService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, bcrypt_cost: u32, allow_admin_signup: bool) -> Self {
        Self {
            repos,
            bcrypt_cost,
            allow_admin_signup,
        }
    }

    // ── Registration ────────────────────────────────────────────

    /// Validate and store a new account.
    ///
    /// Duplicate username or email yields `DomainError::Conflict`.
    pub async fn register(&self, input: Registration) -> DomainResult<User> {
        let input = input.normalized();
        let role = input.validate()?;

        if role == UserRole::Admin && !self.allow_admin_signup {
            warn!(username = %input.username, "Rejected admin self-registration");
            return Err(DomainError::Validation("Invalid role".into()));
        }

        let password_hash = hash_password(&input.password, self.bcrypt_cost)?;

        let user = self
            .repos
            .users()
            .create_user(CreateUserDto {
                username: input.username,
                name: input.name,
                email: input.email,
                phone: input.phone,
                role,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, role = %user.role, "New user registered");
        Ok(user)
    }

    // ── Authentication ──────────────────────────────────────────

    /// Check email + password. Both an unknown email and a wrong password
    /// produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<User> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::Validation("Email and password required".into()));
        }

        let user = self.repos.users().get_user_by_email(&email).await?;

        match user {
            Some(user) if verify_password(password, &user.password_hash) => {
                info!(user_id = user.id, role = %user.role, "User logged in");
                Ok(user)
            }
            _ => {
                warn!(email = %email, "Failed login attempt");
                Err(DomainError::Unauthorized("Invalid email or password".into()))
            }
        }
    }

    // ── Bootstrap ───────────────────────────────────────────────

    /// Create the configured admin account when no admin exists yet.
    /// Returns whether an account was created.
    pub async fn ensure_admin(&self, seed: &AdminSeed) -> DomainResult<bool> {
        if self.repos.users().count_by_role(UserRole::Admin).await? > 0 {
            return Ok(false);
        }

        let password_hash = hash_password(&seed.password, self.bcrypt_cost)?;
        let user = self
            .repos
            .users()
            .create_user(CreateUserDto {
                username: seed.username.clone(),
                name: seed.name.clone(),
                email: seed.email.trim().to_lowercase(),
                phone: seed.phone.clone(),
                role: UserRole::Admin,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "Default admin account created");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Registration {
        Registration {
            username: "asha_k".into(),
            name: "Asha Kumar".into(),
            email: "Asha@Example.com".into(),
            phone: "9876543210".into(),
            role: String::new(),
            password: "secret1".into(),
        }
    }

    fn message(r: Registration) -> String {
        r.normalized().validate().unwrap_err().to_string()
    }

    #[test]
    fn valid_registration_defaults_to_customer() {
        let r = valid().normalized();
        assert_eq!(r.email, "asha@example.com");
        assert_eq!(r.validate().unwrap(), UserRole::Customer);
    }

    #[test]
    fn checks_run_in_order() {
        let mut r = valid();
        r.name = "   ".into();
        r.username = "x".into();
        assert_eq!(message(r), "All fields are required");

        let mut r = valid();
        r.username = "a b".into();
        r.name = "R2D2".into();
        assert_eq!(message(r), "Invalid username");

        let mut r = valid();
        r.name = "R2D2".into();
        r.email = "nope".into();
        assert_eq!(message(r), "Invalid name");

        let mut r = valid();
        r.email = "nope".into();
        r.phone = "123".into();
        assert_eq!(message(r), "Invalid email");

        let mut r = valid();
        r.phone = "123".into();
        r.password = "123".into();
        assert_eq!(message(r), "Invalid phone");

        let mut r = valid();
        r.password = "12345".into();
        r.role = "owner".into();
        assert_eq!(message(r), "Password too short");

        let mut r = valid();
        r.role = "owner".into();
        assert_eq!(message(r), "Invalid role");
    }

    #[test]
    fn admin_role_parses() {
        let mut r = valid();
        r.role = "Admin".into();
        assert_eq!(r.normalized().validate().unwrap(), UserRole::Admin);
    }
}
