use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        auth::{login, me, register},
        campaign::{
            create_campaign, delete_campaign, get_campaign, list_campaigns, update_campaign,
        },
        character::{
            create_character, delete_character, get_character, list_characters, update_character,
        },
        dice::{get_dice, list_dices, roll_dice},
        dice_log::{delete_dice_log, get_dice_log, list_dice_logs},
        dice_set::{
            create_dice_set, delete_dice_set, get_dice_set, list_dice_sets, roll_dice_set,
            update_dice_set,
        },
        health::healthz,
        user::{delete_me, get_user, list_users, update_me},
    },
    doc::ApiDoc,
    error::AppError,
    middleware::rate_limit::{limit, tier, RateLimit},
    state::AppState,
};

/// Builds the application router.
///
/// Every API route carries its own per-client rate limit; methods sharing a path are
/// limited independently. `/healthz` and the documentation are not limited.
///
/// # Returns
/// - `Ok(Router)` - Router awaiting its [`AppState`]
/// - `Err(AppError::ConfigErr)` - A rate limit quota could not be built
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let on = RateLimit::from_config(config);

    let router = Router::new()
        // Auth
        .route("/api/auth/register", limit(post(register), tier::REGISTER, on)?)
        .route("/api/auth/login", limit(post(login), tier::LOGIN, on)?)
        .route("/api/auth/me", limit(get(me), tier::ME, on)?)
        // Users
        .route("/api/users/", limit(get(list_users), tier::READ, on)?)
        .route(
            "/api/users/me/update",
            limit(patch(update_me), tier::ACCOUNT_WRITE, on)?,
        )
        .route(
            "/api/users/me/delete",
            limit(delete(delete_me), tier::ACCOUNT_WRITE, on)?,
        )
        .route("/api/users/{id}", limit(get(get_user), tier::READ, on)?)
        // Campaigns
        .route(
            "/api/campaigns/",
            limit(get(list_campaigns), tier::READ, on)?
                .merge(limit(post(create_campaign), tier::CREATE, on)?),
        )
        .route(
            "/api/campaigns/{id}",
            limit(get(get_campaign), tier::READ, on)?
                .merge(limit(patch(update_campaign), tier::WRITE, on)?)
                .merge(limit(delete(delete_campaign), tier::WRITE, on)?),
        )
        // Characters
        .route(
            "/api/classes/",
            limit(get(list_characters), tier::READ, on)?
                .merge(limit(post(create_character), tier::CREATE, on)?),
        )
        .route(
            "/api/classes/{id}",
            limit(get(get_character), tier::READ, on)?
                .merge(limit(patch(update_character), tier::WRITE, on)?)
                .merge(limit(delete(delete_character), tier::WRITE, on)?),
        )
        // Dice catalog
        .route("/api/dices/", limit(get(list_dices), tier::READ, on)?)
        .route("/api/dices/{id}", limit(get(get_dice), tier::READ, on)?)
        .route("/api/dices/{id}/roll", limit(post(roll_dice), tier::ROLL, on)?)
        // Dice sets
        .route(
            "/api/dicesets/",
            limit(get(list_dice_sets), tier::READ, on)?
                .merge(limit(post(create_dice_set), tier::WRITE, on)?),
        )
        .route(
            "/api/dicesets/{id}",
            limit(get(get_dice_set), tier::READ, on)?
                .merge(limit(patch(update_dice_set), tier::WRITE, on)?)
                .merge(limit(delete(delete_dice_set), tier::WRITE, on)?),
        )
        .route(
            "/api/dicesets/{id}/roll",
            limit(post(roll_dice_set), tier::ROLL, on)?,
        )
        // Roll history
        .route("/api/dicelogs/", limit(get(list_dice_logs), tier::READ, on)?)
        .route(
            "/api/dicelogs/{id}",
            limit(get(get_dice_log), tier::READ, on)?
                .merge(limit(delete(delete_dice_log), tier::READ, on)?),
        )
        .route("/healthz", get(healthz))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()));

    Ok(router)
}
