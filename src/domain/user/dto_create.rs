use super::UserRole;

/// Fields for a new account; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub password_hash: String,
}
