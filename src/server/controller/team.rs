use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        team::{
            AddMemberDto, CreateTeamDto, PaginatedTeamsDto, TeamDto, TeamMemberDto,
            UpdateMemberRoleDto, UpdateTeamDto,
        },
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, team::TeamGuard},
        model::{
            pagination::PageRequest,
            team::{CreateTeamParams, TeamFilter, UpdateTeamParams},
        },
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TeamQueryParams {
    /// Substring matched against team name or description.
    pub search: Option<String>,
    /// Zero-indexed page, defaults to 0.
    pub page: Option<u64>,
    /// Page size, defaults to 10.
    pub limit: Option<u64>,
}

/// Create a team.
///
/// The caller becomes the team's first ADMIN. `memberIds` are added as MEMBER, skipping
/// duplicates, the caller, and unknown users.
///
/// # Returns
/// - `201 Created` - Team created
/// - `409 Conflict` - Team name already exists
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Team name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let params = CreateTeamParams::from_dto(payload, user.id)?;
    let team = TeamService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

/// List the caller's teams, newest first.
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    security(("bearer_auth" = [])),
    params(TeamQueryParams),
    responses(
        (status = 200, description = "Page of the caller's teams", body = PaginatedTeamsDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<TeamQueryParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let filter = TeamFilter {
        search: params.search,
        page: PageRequest::new(params.page, params.limit)?,
    };
    let teams = TeamService::new(&state.db).find_all(filter, user.id).await?;

    Ok((StatusCode::OK, Json(teams.into_dto())))
}

/// Get a team with its members.
///
/// # Access Control
/// - Team member
#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team", body = TeamDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Team not found or caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;
    let access = TeamGuard::new(&state.db)
        .require_member(Some(user.id), Some(id))
        .await?;

    let team = TeamService::new(&state.db).find_one(access.team.id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Update team details.
///
/// # Access Control
/// - Team ADMIN
#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Team ID")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Updated team", body = TeamDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a team admin", body = ErrorDto),
        (status = 404, description = "Team not found or caller is not a member", body = ErrorDto),
        (status = 409, description = "Team name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;
    let access = TeamGuard::new(&state.db)
        .require_admin(Some(user.id), Some(id))
        .await?;

    let params = UpdateTeamParams::from_dto(payload)?;
    let team = TeamService::new(&state.db)
        .update(access.team.id, params)
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Delete a team with its memberships and tickets.
///
/// # Access Control
/// - Team ADMIN
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a team admin", body = ErrorDto),
        (status = 404, description = "Team not found or caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;
    let access = TeamGuard::new(&state.db)
        .require_admin(Some(user.id), Some(id))
        .await?;

    let message = TeamService::new(&state.db).delete(access.team.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new(message))))
}

/// Add a user to the team.
///
/// # Access Control
/// - Team ADMIN
#[utoipa::path(
    post,
    path = "/api/teams/{id}/members",
    tag = TEAM_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Team ID")),
    request_body = AddMemberDto,
    responses(
        (status = 201, description = "Member added", body = TeamMemberDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a team admin", body = ErrorDto),
        (status = 404, description = "Team or user not found", body = ErrorDto),
        (status = 409, description = "User is already a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<AddMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;
    let access = TeamGuard::new(&state.db)
        .require_admin(Some(user.id), Some(id))
        .await?;

    let member = TeamService::new(&state.db)
        .add_member(access.team.id, payload.user_id, payload.role.map(Into::into))
        .await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Remove a member from the team.
///
/// # Access Control
/// - Team ADMIN
///
/// # Returns
/// - `400 Bad Request` - Target is the team's last ADMIN
#[utoipa::path(
    delete,
    path = "/api/teams/{id}/members/{user_id}",
    tag = TEAM_TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Team ID"),
        ("user_id" = i32, Path, description = "User ID of the member to remove")
    ),
    responses(
        (status = 200, description = "Member removed", body = MessageDto),
        (status = 400, description = "Cannot remove the last admin", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a team admin", body = ErrorDto),
        (status = 404, description = "Team or membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;
    let access = TeamGuard::new(&state.db)
        .require_admin(Some(user.id), Some(id))
        .await?;

    let message = TeamService::new(&state.db)
        .remove_member(access.team.id, user_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(message))))
}

/// Change a member's team role.
///
/// # Access Control
/// - Team ADMIN
///
/// # Returns
/// - `400 Bad Request` - Would demote the team's last ADMIN
#[utoipa::path(
    patch,
    path = "/api/teams/{id}/members/{user_id}/role",
    tag = TEAM_TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Team ID"),
        ("user_id" = i32, Path, description = "User ID of the member")
    ),
    request_body = UpdateMemberRoleDto,
    responses(
        (status = 200, description = "Role updated", body = TeamMemberDto),
        (status = 400, description = "Cannot demote the last admin", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a team admin", body = ErrorDto),
        (status = 404, description = "Team or membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, user_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateMemberRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;
    let access = TeamGuard::new(&state.db)
        .require_admin(Some(user.id), Some(id))
        .await?;

    let member = TeamService::new(&state.db)
        .update_member_role(access.team.id, user_id, payload.role.into())
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Leave a team.
///
/// # Access Control
/// - Team member
///
/// # Returns
/// - `400 Bad Request` - Caller is the team's last ADMIN
#[utoipa::path(
    post,
    path = "/api/teams/{id}/leave",
    tag = TEAM_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Left the team", body = MessageDto),
        (status = 400, description = "Cannot leave as the last admin", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Team not found or caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;
    let access = TeamGuard::new(&state.db)
        .require_member(Some(user.id), Some(id))
        .await?;

    let message = TeamService::new(&state.db)
        .leave(access.team.id, access.membership.user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(message))))
}
