//! OpenAPI document for the HTTP API.
//!
//! Collects every `#[utoipa::path]` handler and registers the bearer token security
//! scheme. Served through Swagger UI at `/api/docs`.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::controller,
};

/// Registers the `bearer` security scheme referenced by protected routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Access token issued by POST /api/auth/login."))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Rollbook API",
        description = "Campaigns, characters, dice sets and roll history for tabletop games."
    ),
    paths(
        controller::auth::register,
        controller::auth::login,
        controller::auth::me,
        controller::user::get_user,
        controller::user::list_users,
        controller::user::update_me,
        controller::user::delete_me,
        controller::campaign::create_campaign,
        controller::campaign::get_campaign,
        controller::campaign::list_campaigns,
        controller::campaign::update_campaign,
        controller::campaign::delete_campaign,
        controller::character::create_character,
        controller::character::get_character,
        controller::character::list_characters,
        controller::character::update_character,
        controller::character::delete_character,
        controller::dice::get_dice,
        controller::dice::list_dices,
        controller::dice::roll_dice,
        controller::dice_set::create_dice_set,
        controller::dice_set::get_dice_set,
        controller::dice_set::list_dice_sets,
        controller::dice_set::update_dice_set,
        controller::dice_set::delete_dice_set,
        controller::dice_set::roll_dice_set,
        controller::dice_log::list_dice_logs,
        controller::dice_log::get_dice_log,
        controller::dice_log::delete_dice_log,
        controller::health::healthz,
    ),
    components(schemas(ErrorDto, MessageDto)),
    tags(
        (name = "auth", description = "Registration, login and the current user"),
        (name = "user", description = "User profiles"),
        (name = "campaign", description = "Campaigns owned by the current user"),
        (name = "class", description = "Characters within campaigns"),
        (name = "dice", description = "Dice catalog and single rolls"),
        (name = "diceset", description = "Dice sets and set rolls"),
        (name = "dicelog", description = "Roll history"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_api_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/auth/register",
            "/api/auth/login",
            "/api/auth/me",
            "/api/users/{id}",
            "/api/users/me/update",
            "/api/campaigns/",
            "/api/classes/{id}",
            "/api/dices/{id}/roll",
            "/api/dicesets/{id}/roll",
            "/api/dicelogs/{id}",
            "/healthz",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn registers_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("bearer"));
        assert!(components.schemas.contains_key("ErrorDto"));
    }
}
