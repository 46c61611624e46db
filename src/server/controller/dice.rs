use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::TransactionTrait;

use crate::{
    model::{
        api::{ErrorDto, PageQuery},
        dice::{DiceDto, DiceRollDto, RollQuery},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{dice::RollTarget, page::Page},
        service::dice::DiceService,
        state::AppState,
    },
};

/// Tag for grouping dice endpoints in OpenAPI documentation
pub static DICE_TAG: &str = "dice";

#[utoipa::path(
    get,
    path = "/api/dices/{id}",
    tag = DICE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Dice id")),
    responses(
        (status = 200, description = "Dice found", body = DiceDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Dice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let _ = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let dice = DiceService::new(&txn).get(id).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(dice.into_dto())))
}

/// List the dice catalog, smallest dice first.
#[utoipa::path(
    get,
    path = "/api/dices/",
    tag = DICE_TAG,
    security(("bearer" = [])),
    params(PageQuery),
    responses(
        (status = 200, description = "Dice catalog", body = Vec<DiceDto>),
        (status = 400, description = "Invalid paging", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_dices(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = Page::from_query(page)?;

    let txn = state.db.begin().await?;

    let _ = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let dices = DiceService::new(&txn).list(page).await?;

    txn.commit().await?;

    let dices: Vec<DiceDto> = dices.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dices)))
}

/// Roll a single dice.
///
/// When both `campaign_id` and `character_id` are given the result is appended to the
/// caller's roll history under that character; the character must belong to the caller
/// and sit in that campaign. Without them the roll is not recorded.
///
/// # Returns
/// - `200 OK` - The draw, between 1 and the dice's side count
/// - `400 Bad Request` - Only one of the target ids given, or character not in campaign
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Character belongs to another user
/// - `404 Not Found` - Unknown dice or character
#[utoipa::path(
    post,
    path = "/api/dices/{id}/roll",
    tag = DICE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Dice id"), RollQuery),
    responses(
        (status = 200, description = "Roll result", body = DiceRollDto),
        (status = 400, description = "Invalid roll target", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Character not owned", body = ErrorDto),
        (status = 404, description = "Dice or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn roll_dice(
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

    let roll = DiceService::new(&txn)
        .roll(id, &principal, target, state.roller.as_ref())
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(roll.into_dto())))
}
