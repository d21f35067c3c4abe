use async_trait::async_trait;

use super::{CreateUserDto, User, UserRole};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user. Duplicate username or email yields `DomainError::Conflict`.
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User>;

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    async fn count_by_role(&self, role: UserRole) -> DomainResult<u64>;
}
