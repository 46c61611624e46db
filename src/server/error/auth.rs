use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected route.
    #[error("Request carried no bearer token")]
    MissingToken,

    /// Token failed signature, expiry or shape validation.
    ///
    /// The underlying `jsonwebtoken` error is kept for server-side logs only.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Token is valid but its subject no longer resolves to a user.
    #[error("Token subject {0} does not match any user")]
    UnknownSubject(String),

    /// Login identifier or password did not match.
    ///
    /// Covers unknown users and wrong passwords alike so callers cannot enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant answers 401 Unauthorized with a `WWW-Authenticate: Bearer` challenge.
/// Login failures report "Invalid credentials"; token problems report a single generic
/// message so clients learn nothing about why a token was refused.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let detail = match self {
            Self::MissingToken => "Not authenticated",
            Self::InvalidToken(_) | Self::UnknownSubject(_) => "Could not validate credentials",
            Self::InvalidCredentials => "Invalid credentials",
        };

        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            Json(ErrorDto::new(detail)),
        )
            .into_response()
    }
}
