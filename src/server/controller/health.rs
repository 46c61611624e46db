use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageDto;

pub static HEALTH_TAG: &str = "health";

/// Liveness probe. Does not touch the database.
#[utoipa::path(
    get,
    path = "/healthz",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = MessageDto)
    ),
)]
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(MessageDto::new("ok")))
}
