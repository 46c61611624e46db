//! User domain models and parameters.
//!
//! Users own every other record in the system. The stored password hash never leaves
//! this layer; DTO conversion drops it.

use chrono::{DateTime, Utc};

use crate::model::user::{UpdateUserDto, UserDto};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_name: entity.user_name,
            email: entity.email,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            user_name: self.user_name,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

/// Registration input with the plaintext password; the service hashes it.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Row values for a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Profile patch as received from the principal.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            user_name: dto.user_name.map(|v| v.trim().to_string()),
            email: dto.email.map(|v| v.trim().to_string()),
            password: dto.password,
        }
    }
}

/// Column changes applied by the repository; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub user_name: Option<String>,
}
