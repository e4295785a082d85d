use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        ticket::{CreateTicketDto, TicketDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::ticket::{CreateTicketParams, Ticket},
        service::ticket::TicketService,
        state::AppState,
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TicketQueryParams {
    /// Restrict to a single team the caller belongs to.
    pub team_id: Option<i32>,
}

/// Open a ticket in one of the caller's teams.
///
/// # Access Control
/// - Authenticated, and a member of `teamId` in the body
///
/// # Returns
/// - `201 Created` - Ticket created (status OPEN unless given)
/// - `403 Forbidden` - Caller is not a member of the team
#[utoipa::path(
    post,
    path = "/api/tickets",
    tag = TICKET_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = TicketDto),
        (status = 400, description = "Invalid ticket data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let params = CreateTicketParams::from_dto(payload)?;
    let ticket = TicketService::new(&state.db)
        .create_ticket(user.id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(ticket.into_dto())))
}

/// List tickets of the caller's teams, newest first.
///
/// # Returns
/// - `200 OK` - Tickets of `teamId`, or of every team the caller belongs to
/// - `403 Forbidden` - `teamId` is not one of the caller's teams
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = TICKET_TAG,
    security(("bearer_auth" = [])),
    params(TicketQueryParams),
    responses(
        (status = 200, description = "Visible tickets", body = Vec<TicketDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the requested team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tickets(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<TicketQueryParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let tickets: Vec<TicketDto> = TicketService::new(&state.db)
        .get_tickets(user.id, params.team_id)
        .await?
        .into_iter()
        .map(Ticket::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(tickets)))
}
