use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::auth::{validate_email, validate_password, validate_user_name};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Self-service profile patch; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserDto {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(user_name) = &self.user_name {
            validate_user_name(user_name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(password) = &self.password {
            validate_password(password)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFilterQuery {
    /// Case-insensitive substring of the user name
    pub user_name: Option<String>,
}
