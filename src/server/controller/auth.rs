use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use sea_orm::TransactionTrait;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterDto, TokenDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::RegisterUserParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// User name and email must both be unused. The password is stored as an Argon2 hash.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Requested user name, email and plaintext password
///
/// # Returns
/// - `200 OK` - The created account
/// - `400 Bad Request` - Invalid fields, or name/email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid data or already registered", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::BadRequest)?;

    let txn = state.db.begin().await?;

    let user = AuthService::new(&txn, &state.tokens)
        .register(RegisterUserParams {
            user_name: payload.user_name,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Exchange credentials for an access token.
///
/// `username` accepts either the user name or the email address.
///
/// # Returns
/// - `200 OK` - Bearer token
/// - `401 Unauthorized` - Unknown user or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token issued", body = TokenDto),
        (status = 400, description = "Invalid data", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::BadRequest)?;

    let txn = state.db.begin().await?;

    let token = AuthService::new(&txn, &state.tokens)
        .login(&payload.username, &payload.password)
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(TokenDto::bearer(token))))
}

/// Describe the authenticated user.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(principal.into_dto())))
}
