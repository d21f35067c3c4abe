//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use super::{db_err, is_unique_violation};
use crate::domain::{CreateUserDto, DomainError, DomainResult, User, UserRepository, UserRole};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Customer => UserRole::Customer,
        user::UserRole::Admin => UserRole::Admin,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Customer => user::UserRole::Customer,
        UserRole::Admin => user::UserRole::Admin,
    }
}

fn model_to_domain(m: user::Model) -> User {
    User {
        id: m.id,
        username: m.username,
        name: m.name,
        email: m.email,
        phone: m.phone,
        role: entity_role_to_domain(m.role),
        password_hash: m.password_hash,
        created_at: m.created_at,
    }
}

// ── UserRepository impl ─────────────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        debug!("Creating user: {}", dto.username);

        let model = user::ActiveModel {
            username: Set(dto.username),
            name: Set(dto.name),
            email: Set(dto.email),
            phone: Set(dto.phone),
            role: Set(domain_role_to_entity(dto.role)),
            password_hash: Set(dto.password_hash),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let saved = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::Conflict("Username or Email already exists".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(model_to_domain(saved))
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn count_by_role(&self, role: UserRole) -> DomainResult<u64> {
        user::Entity::find()
            .filter(user::Column::Role.eq(domain_role_to_entity(role)))
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}
