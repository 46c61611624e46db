use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::TransactionTrait;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, PageQuery},
        user::{UpdateUserDto, UserDto, UserFilterQuery},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            page::Page,
            user::{UpdateUserParams, UserFilter},
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get a user by id.
///
/// Any authenticated user may read any other user's public profile.
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let _ = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let user = UserService::new(&txn).get(id).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List users, optionally filtered by a user name substring.
#[utoipa::path(
    get,
    path = "/api/users/",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(PageQuery, UserFilterQuery),
    responses(
        (status = 200, description = "Users ordered by id", body = Vec<UserDto>),
        (status = 400, description = "Invalid paging", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(page): Query<PageQuery>,
    Query(filter): Query<UserFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = Page::from_query(page)?;

    let txn = state.db.begin().await?;

    let _ = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let users = UserService::new(&txn)
        .list(
            UserFilter {
                user_name: filter.user_name,
            },
            page,
        )
        .await?;

    txn.commit().await?;

    let users: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Update the authenticated user's own profile.
///
/// Only the supplied fields change. A new user name or email must not belong to another
/// account; a new password is re-hashed. Changing the email invalidates tokens issued for
/// the old address, since tokens name the account by email.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Invalid fields, or name/email already registered
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    patch,
    path = "/api/users/me/update",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Invalid data or already registered", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::BadRequest)?;

    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let user = UserService::new(&txn)
        .update_me(&principal, UpdateUserParams::from_dto(payload))
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete the authenticated user's account.
///
/// Removes every campaign, character, dice set and roll owned by the account in the same
/// transaction.
#[utoipa::path(
    delete,
    path = "/api/users/me/delete",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    UserService::new(&txn).delete_me(&principal).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User deleted"))))
}
