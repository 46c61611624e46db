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
        dice_log::{DiceLogDto, DiceLogFilterQuery},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{dice_log::DiceLogFilter, page::Page},
        service::dice_log::DiceLogService,
        state::AppState,
    },
};

/// Tag for grouping roll history endpoints in OpenAPI documentation
pub static DICE_LOG_TAG: &str = "dicelog";

/// List the authenticated user's roll history, newest first.
///
/// At most the 100 most recent rolls are retained per user.
#[utoipa::path(
    get,
    path = "/api/dicelogs/",
    tag = DICE_LOG_TAG,
    security(("bearer" = [])),
    params(PageQuery, DiceLogFilterQuery),
    responses(
        (status = 200, description = "Rolls, newest first", body = Vec<DiceLogDto>),
        (status = 400, description = "Invalid paging", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_dice_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(page): Query<PageQuery>,
    Query(filter): Query<DiceLogFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = Page::from_query(page)?;

    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let logs = DiceLogService::new(&txn)
        .list(
            DiceLogFilter {
                user_id: principal.id,
                campaign_id: filter.campaign_id,
                character_id: filter.character_id,
            },
            page,
        )
        .await?;

    txn.commit().await?;

    let logs: Vec<DiceLogDto> = logs.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(logs)))
}

#[utoipa::path(
    get,
    path = "/api/dicelogs/{id}",
    tag = DICE_LOG_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Dice log id")),
    responses(
        (status = 200, description = "Roll found", body = DiceLogDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Dice log not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dice_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let log = DiceLogService::new(&txn).get(id, &principal).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(log.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/dicelogs/{id}",
    tag = DICE_LOG_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Dice log id")),
    responses(
        (status = 200, description = "Roll deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Dice log not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dice_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    DiceLogService::new(&txn).delete(id, &principal).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Dice log deleted"))))
}
