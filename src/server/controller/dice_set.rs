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
        dice::RollQuery,
        dice_set::{
            CreateDiceSetDto, DiceSetDto, DiceSetFilterQuery, DiceSetRollDto, UpdateDiceSetDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            dice::RollTarget,
            dice_set::{CreateDiceSetParams, DiceSetFilter, UpdateDiceSetParams},
            page::Page,
        },
        service::dice_set::DiceSetService,
        state::AppState,
    },
};

/// Tag for grouping dice set endpoints in OpenAPI documentation
pub static DICE_SET_TAG: &str = "diceset";

/// Create a dice set for one of the authenticated user's characters.
///
/// Repeated ids in `dice_ids` collapse into a quantity, keeping first-seen order. A
/// character holds at most 5 sets.
///
/// # Returns
/// - `200 OK` - The created set with its composition
/// - `400 Bad Request` - Invalid fields or character already has 5 sets ("limit reached")
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Character belongs to another user
/// - `404 Not Found` - Character or one of the dice does not exist
#[utoipa::path(
    post,
    path = "/api/dicesets/",
    tag = DICE_SET_TAG,
    security(("bearer" = [])),
    request_body = CreateDiceSetDto,
    responses(
        (status = 200, description = "Dice set created", body = DiceSetDto),
        (status = 400, description = "Invalid data or limit reached", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Character not owned", body = ErrorDto),
        (status = 404, description = "Character or dice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dice_set(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDiceSetDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::BadRequest)?;

    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let set = DiceSetService::new(&txn)
        .create(CreateDiceSetParams::from_dto(payload), &principal)
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(set.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/dicesets/{id}",
    tag = DICE_SET_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Dice set id")),
    responses(
        (status = 200, description = "Dice set found", body = DiceSetDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Dice set not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dice_set(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let set = DiceSetService::new(&txn).get(id, &principal).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(set.into_dto())))
}

/// List the authenticated user's dice sets, optionally for a single character.
#[utoipa::path(
    get,
    path = "/api/dicesets/",
    tag = DICE_SET_TAG,
    security(("bearer" = [])),
    params(PageQuery, DiceSetFilterQuery),
    responses(
        (status = 200, description = "Dice sets ordered by id", body = Vec<DiceSetDto>),
        (status = 400, description = "Invalid paging", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_dice_sets(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(page): Query<PageQuery>,
    Query(filter): Query<DiceSetFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = Page::from_query(page)?;

    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let sets = DiceSetService::new(&txn)
        .list(
            DiceSetFilter {
                user_id: principal.id,
                character_id: filter.character_id,
            },
            page,
        )
        .await?;

    txn.commit().await?;

    let sets: Vec<DiceSetDto> = sets.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(sets)))
}

/// Rename a dice set and/or replace its composition. Owner only.
#[utoipa::path(
    patch,
    path = "/api/dicesets/{id}",
    tag = DICE_SET_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Dice set id")),
    request_body = UpdateDiceSetDto,
    responses(
        (status = 200, description = "Dice set updated", body = DiceSetDto),
        (status = 400, description = "Invalid data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Dice set or dice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dice_set(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDiceSetDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::BadRequest)?;

    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let set = DiceSetService::new(&txn)
        .update(id, &principal, UpdateDiceSetParams::from_dto(payload))
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(set.into_dto())))
}

/// Delete a dice set and the rolls recorded for it. Owner only.
#[utoipa::path(
    delete,
    path = "/api/dicesets/{id}",
    tag = DICE_SET_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Dice set id")),
    responses(
        (status = 200, description = "Dice set deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Dice set not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dice_set(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    DiceSetService::new(&txn).delete(id, &principal).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Dice set deleted"))))
}

/// Roll every dice of a set.
///
/// Each dice is drawn `quantity` times in composition order. The total is appended to the
/// caller's roll history under the set's character. Optional `campaign_id` and
/// `character_id` must match the set when given.
///
/// # Returns
/// - `200 OK` - Individual results and their total
/// - `400 Bad Request` - Target does not match the set
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Set belongs to another user
/// - `404 Not Found` - Set missing or has no dice
#[utoipa::path(
    post,
    path = "/api/dicesets/{id}/roll",
    tag = DICE_SET_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Dice set id"), RollQuery),
    responses(
        (status = 200, description = "Roll results", body = DiceSetRollDto),
        (status = 400, description = "Invalid roll target", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Dice set not found or has no dices", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn roll_dice_set(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(query): Query<RollQuery>,
) -> Result<impl IntoResponse, AppError> {
    let target = RollTarget::from_query(query)?;

    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let roll = DiceSetService::new(&txn)
        .roll(id, &principal, target, state.roller.as_ref())
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(roll.into_dto())))
}
