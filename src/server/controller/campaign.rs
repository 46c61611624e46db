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
        campaign::{CampaignDto, CampaignFilterQuery, CreateCampaignDto, UpdateCampaignDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            campaign::{CampaignFilter, CreateCampaignParams, UpdateCampaignParams},
            page::Page,
        },
        service::campaign::CampaignService,
        state::AppState,
    },
};

/// Tag for grouping campaign endpoints in OpenAPI documentation
pub static CAMPAIGN_TAG: &str = "campaign";

/// Create a campaign owned by the authenticated user.
///
/// Titles are unique per owner. `max_classes` is clamped to 1..=4 and defaults to 4.
///
/// # Returns
/// - `200 OK` - The created campaign
/// - `400 Bad Request` - Invalid fields or duplicate title
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/campaigns/",
    tag = CAMPAIGN_TAG,
    security(("bearer" = [])),
    request_body = CreateCampaignDto,
    responses(
        (status = 200, description = "Campaign created", body = CampaignDto),
        (status = 400, description = "Invalid data or duplicate title", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_campaign(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCampaignDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::BadRequest)?;

    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let campaign = CampaignService::new(&txn)
        .create(CreateCampaignParams::from_dto(principal.id, payload))
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(campaign.into_dto())))
}

/// Get one of the authenticated user's campaigns.
///
/// # Returns
/// - `200 OK` - The campaign
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Campaign belongs to another user
/// - `404 Not Found` - No campaign with that id
#[utoipa::path(
    get,
    path = "/api/campaigns/{id}",
    tag = CAMPAIGN_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Campaign found", body = CampaignDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campaign(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let campaign = CampaignService::new(&txn).get(id, &principal).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(campaign.into_dto())))
}

/// List the authenticated user's campaigns.
#[utoipa::path(
    get,
    path = "/api/campaigns/",
    tag = CAMPAIGN_TAG,
    security(("bearer" = [])),
    params(PageQuery, CampaignFilterQuery),
    responses(
        (status = 200, description = "Campaigns ordered by id", body = Vec<CampaignDto>),
        (status = 400, description = "Invalid paging", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_campaigns(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(page): Query<PageQuery>,
    Query(filter): Query<CampaignFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = Page::from_query(page)?;

    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let campaigns = CampaignService::new(&txn)
        .list(
            CampaignFilter {
                created_by: principal.id,
                title: filter.title,
            },
            page,
        )
        .await?;

    txn.commit().await?;

    let campaigns: Vec<CampaignDto> = campaigns.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(campaigns)))
}

/// Update a campaign. Owner only.
///
/// Lowering `max_classes` below the current character count is allowed; it only blocks
/// further creations.
#[utoipa::path(
    patch,
    path = "/api/campaigns/{id}",
    tag = CAMPAIGN_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Campaign id")),
    request_body = UpdateCampaignDto,
    responses(
        (status = 200, description = "Campaign updated", body = CampaignDto),
        (status = 400, description = "Invalid data or duplicate title", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_campaign(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCampaignDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::BadRequest)?;

    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    let campaign = CampaignService::new(&txn)
        .update(id, &principal, UpdateCampaignParams::from_dto(payload))
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(campaign.into_dto())))
}

/// Delete a campaign with its characters, dice sets and rolls. Owner only.
#[utoipa::path(
    delete,
    path = "/api/campaigns/{id}",
    tag = CAMPAIGN_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Campaign deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_campaign(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let principal = AuthGuard::new(&txn, &state.tokens, &headers)
        .require()
        .await?;

    CampaignService::new(&txn).delete(id, &principal).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Campaign deleted"))))
}
