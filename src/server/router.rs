use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        team::{self, TEAM_TAG},
        ticket::{self, TICKET_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "teamdesk", description = "Teams, memberships and tickets"),
    modifiers(&SecurityAddon),
    tags(
        (name = AUTH_TAG, description = "Registration, login and profile"),
        (name = TEAM_TAG, description = "Teams and team membership"),
        (name = TICKET_TAG, description = "Team tickets"),
        (name = USER_TAG, description = "Account management")
    )
)]
struct ApiDoc;

/// Registers the `bearer_auth` JWT scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the API router with every endpoint and the Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::profile))
        .routes(routes!(ticket::create_ticket, ticket::get_tickets))
        .routes(routes!(team::create_team, team::get_teams))
        .routes(routes!(team::get_team, team::update_team, team::delete_team))
        .routes(routes!(team::add_member))
        .routes(routes!(team::remove_member))
        .routes(routes!(team::update_member_role))
        .routes(routes!(team::leave_team))
        .routes(routes!(user::create_user, user::get_users))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(user::get_user_by_email))
        .routes(routes!(user::get_user_by_username))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
