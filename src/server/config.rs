//! Environment-based application configuration.
//!
//! Values are read once at startup after `.env` has been loaded. Only `JWT_SECRET_KEY`
//! is mandatory; everything else has a default suitable for a single-node deployment.

use jsonwebtoken::Algorithm;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://rollbook.db?mode=rwc";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,

    pub jwt_secret_key: String,
    pub jwt_algorithm: Algorithm,
    pub access_token_expire_minutes: i64,

    /// Origins allowed for cross-origin requests; empty disables CORS headers.
    pub cors_allowed_origins: Vec<String>,
    pub bind_address: String,
    pub rate_limit_enabled: bool,
    /// Trust client-IP forwarding headers; only safe behind a proxy that overwrites them.
    pub trust_proxy_headers: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            jwt_secret_key: std::env::var("JWT_SECRET_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET_KEY".to_string()))?,
            jwt_algorithm: parse_algorithm(&var_or("JWT_ALGORITHM", "HS256"))?,
            access_token_expire_minutes: parse_minutes(&var_or(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                &DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES.to_string(),
            ))?,
            cors_allowed_origins: parse_origins(&var_or("CORS_ALLOWED_ORIGINS", "")),
            bind_address: var_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            rate_limit_enabled: parse_bool("RATE_LIMIT_ENABLED", &var_or("RATE_LIMIT_ENABLED", "true"))?,
            trust_proxy_headers: parse_bool(
                "TRUST_PROXY_HEADERS",
                &var_or("TRUST_PROXY_HEADERS", "false"),
            )?,
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Only the HMAC family is accepted since the key is a shared secret.
fn parse_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    match value {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(invalid("JWT_ALGORITHM", other, "expected HS256, HS384 or HS512")),
    }
}

fn parse_minutes(value: &str) -> Result<i64, ConfigError> {
    match value.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(invalid(
            "ACCESS_TOKEN_EXPIRE_MINUTES",
            value,
            "expected a positive number of minutes",
        )),
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(var, value, "expected true or false")),
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn invalid(var: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
