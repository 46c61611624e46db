use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::check_length;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterDto {
    pub fn validate(&self) -> Result<(), String> {
        validate_user_name(&self.user_name)?;
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

/// Login form. `username` may hold either the user name or the email address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    #[serde(alias = "login")]
    pub username: String,
    pub password: String,
}

impl LoginDto {
    pub fn validate(&self) -> Result<(), String> {
        check_length("username", &self.username, 1, 255)?;
        if self.password.is_empty() {
            return Err("password must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
}

impl TokenDto {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Names may not contain `@` so they can never be mistaken for an email at login.
pub(crate) fn validate_user_name(user_name: &str) -> Result<(), String> {
    check_length("user_name", user_name, 3, 50)?;
    if user_name.contains('@') {
        return Err("user_name must not contain '@'".to_string());
    }
    Ok(())
}

/// Shallow shape check; deliverability is not verified.
pub(crate) fn validate_email(email: &str) -> Result<(), String> {
    check_length("email", email, 3, 255)?;
    match email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err("email must be a valid email address".to_string()),
    }
}

pub(crate) fn validate_password(password: &str) -> Result<(), String> {
    let len = password.chars().count();
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&len) {
        return Err(format!(
            "password must be between {} and {} characters",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
        ));
    }
    Ok(())
}
