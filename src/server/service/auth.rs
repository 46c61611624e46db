//! Registration, login and principal resolution.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterUserParams, User},
    service::{
        conflict_on_duplicate,
        password::{hash_password, verify_password},
        token::TokenSigner,
    },
};

pub(crate) const DUPLICATE_ACCOUNT: &str = "Username or email already registered";

pub struct AuthService<'a, C: ConnectionTrait> {
    db: &'a C,
    tokens: &'a TokenSigner,
}

impl<'a, C: ConnectionTrait> AuthService<'a, C> {
    pub fn new(db: &'a C, tokens: &'a TokenSigner) -> Self {
        Self { db, tokens }
    }

    /// Creates an account after checking name and email are free.
    ///
    /// # Returns
    /// - `Ok(User)` - The new user
    /// - `Err(AppError::Conflict)` - Name or email already registered
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let user_name = params.user_name.trim().to_string();
        let email = params.email.trim().to_string();

        if repo
            .is_taken(Some(&user_name), Some(&email), None)
            .await?
        {
            tracing::warn!("Registration rejected, {} or {} already taken", user_name, email);
            return Err(AppError::Conflict(DUPLICATE_ACCOUNT.to_string()));
        }

        let user = repo
            .create(CreateUserParams {
                user_name,
                email,
                password_hash: hash_password(&params.password)?,
            })
            .await
            .map_err(conflict_on_duplicate(DUPLICATE_ACCOUNT))?;

        tracing::info!("Registered user {} ({})", user.id, user.user_name);

        Ok(user)
    }

    /// Checks credentials and issues an access token.
    ///
    /// `identifier` matches either the user name or the email.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed access token
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    pub async fn login(&self, identifier: &str, password: &str) -> Result<String, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_login(identifier.trim()).await? else {
            tracing::warn!("Login failed for unknown identifier");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            tracing::warn!("Login failed for user {}", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&user.email)?;

        tracing::info!("User {} logged in", user.id);

        Ok(token)
    }

    /// Resolves a bearer token to the user it was issued for.
    pub async fn resolve_principal(&self, token: &str) -> Result<User, AppError> {
        let claims = self.tokens.verify(token)?;

        let user = UserRepository::new(self.db)
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::UnknownSubject(claims.sub))?;

        Ok(user)
    }
}
