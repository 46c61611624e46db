use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::ConnectionTrait;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::{auth::AuthService, token::TokenSigner},
};

/// Resolves the principal of a request from its `Authorization: Bearer` header.
///
/// Constructed per request with the request's connection so the principal lookup joins
/// the same unit of work as the rest of the handler.
pub struct AuthGuard<'a, C: ConnectionTrait> {
    db: &'a C,
    tokens: &'a TokenSigner,
    headers: &'a HeaderMap,
}

impl<'a, C: ConnectionTrait> AuthGuard<'a, C> {
    pub fn new(db: &'a C, tokens: &'a TokenSigner, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Returns the authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid and its subject exists
    /// - `Err(AuthError::MissingToken)` - No bearer credentials on the request
    /// - `Err(AuthError::InvalidToken)` - Bad signature, algorithm or expiry
    /// - `Err(AuthError::UnknownSubject)` - Token names a user that no longer exists
    pub async fn require(&self) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        AuthService::new(self.db, self.tokens)
            .resolve_principal(token)
            .await
    }
}

/// Extracts the credentials of a `Bearer` authorization header.
///
/// The scheme is matched case-insensitively; empty credentials count as absent.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
