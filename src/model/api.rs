use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Error body returned for every non-2xx response produced by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub detail: String,
}

impl ErrorDto {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Plain acknowledgement body for deletes and other operations without a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Offset/limit paging shared by every list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Rows to skip (default 0)
    #[serde(default, alias = "skip")]
    pub offset: i64,
    /// Rows to return, 1..=100 (default 100)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

pub const MAX_PAGE_LIMIT: i64 = 100;

fn default_limit() -> i64 {
    MAX_PAGE_LIMIT
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: MAX_PAGE_LIMIT,
        }
    }
}

impl PageQuery {
    /// Checks `offset >= 0` and `1 <= limit <= 100`.
    pub fn validate(&self) -> Result<(), String> {
        if self.offset < 0 {
            return Err("offset must be greater than or equal to 0".to_string());
        }
        if !(1..=MAX_PAGE_LIMIT).contains(&self.limit) {
            return Err(format!("limit must be between 1 and {}", MAX_PAGE_LIMIT));
        }
        Ok(())
    }
}

/// Checks that `value` holds between `min` and `max` characters after trimming.
pub fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(format!(
            "{} must be between {} and {} characters",
            field, min, max
        ));
    }
    Ok(())
}
