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
        character::{CharacterDto, CharacterFilterQuery, CreateCharacterDto, UpdateCharacterDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            character::{CharacterFilter, CreateCharacterParams, UpdateCharacterParams},
            page::Page,
        },
        service::character::CharacterService,
        state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "class";

/// Create a character in one of the authenticated user's campaigns.
///
/// The campaign must belong to the caller and hold fewer characters than its
/// `max_classes` cap.
///
/// # Returns
/// - `200 OK` - The created character
/// - `400 Bad Request` - Invalid fields or campaign is full ("limit reached")
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Campaign belongs to another user
/// - `404 Not Found` - Campaign does not exist
#[utoipa::path(
    post,
    path = "/api/classes/",
    tag = CHARACTER_TAG,
    security(("bearer" = [])),
    request_body = CreateCharacterDto,
    responses(
        (status = 200, description = "Character created", body = CharacterDto),
        (status = 400, description = "Invalid data or limit reached", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Campaign not owned", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::BadRequest)?;

    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let character = CharacterService::new(&txn)
        .create(CreateCharacterParams::from_dto(principal.id, payload), &principal)
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Get one of the authenticated user's characters.
#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    tag = CHARACTER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Character id")),
    responses(
        (status = 200, description = "Character found", body = CharacterDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let character = CharacterService::new(&txn).get(id, &principal).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// List the authenticated user's characters.
///
/// Optionally narrowed to one campaign and/or a name substring.
#[utoipa::path(
    get,
    path = "/api/classes/",
    tag = CHARACTER_TAG,
    security(("bearer" = [])),
    params(PageQuery, CharacterFilterQuery),
    responses(
        (status = 200, description = "Characters ordered by id", body = Vec<CharacterDto>),
        (status = 400, description = "Invalid paging", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_characters(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(page): Query<PageQuery>,
    Query(filter): Query<CharacterFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = Page::from_query(page)?;

    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let characters = CharacterService::new(&txn)
        .list(
            CharacterFilter {
                user_id: principal.id,
                campaign_id: filter.campaign_id,
                name: filter.name,
            },
            page,
        )
        .await?;

    txn.commit().await?;

    let characters: Vec<CharacterDto> = characters.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(characters)))
}

/// Update a character. Owner only; the campaign cannot be changed.
#[utoipa::path(
    patch,
    path = "/api/classes/{id}",
    tag = CHARACTER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Character id")),
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "Character updated", body = CharacterDto),
        (status = 400, description = "Invalid data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::BadRequest)?;

    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let character = CharacterService::new(&txn)
        .update(id, &principal, UpdateCharacterParams::from_dto(payload))
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Delete a character with its dice sets and rolls. Owner only.
#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    tag = CHARACTER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Character id")),
    responses(
        (status = 200, description = "Character deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    CharacterService::new(&txn).delete(id, &principal).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Character deleted"))))
}
