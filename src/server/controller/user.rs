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
        user::{CreateUserDto, PaginatedUsersDto, SortOrderDto, UpdateUserDto, UserDto, UserRoleDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::{
            pagination::PageRequest,
            user::{CreateUserParams, UpdateUserParams, UserFilter},
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQueryParams {
    /// Substring matched against username or email.
    pub search: Option<String>,
    /// Zero-indexed page, defaults to 0.
    pub page: Option<u64>,
    /// Page size, defaults to 10.
    pub limit: Option<u64>,
    /// Username ordering, defaults to ascending.
    pub sort: Option<SortOrderDto>,
    /// Restrict to one account role.
    pub role: Option<UserRoleDto>,
}

/// Create an account.
///
/// # Access Control
/// - `Admin` - Only account admins can create accounts directly
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Email or username already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateUserParams::from_dto(payload)?;
    let user = UserService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List accounts with search, role filter and username ordering.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(UserQueryParams),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<UserQueryParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let filter = UserFilter {
        search: params.search,
        page: PageRequest::new(params.page, params.limit)?,
        sort: params.sort.map(Into::into).unwrap_or_default(),
        role: params.role.map(Into::into),
    };
    let users = UserService::new(&state.db).find_all(filter).await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db).find_user_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users/email/{email}",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(("email" = String, Path, description = "Exact email address")),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db)
        .find_user_by_email(&email)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users/username/{username}",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(("username" = String, Path, description = "Exact username")),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_username(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db)
        .find_user_by_username(&username)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update an account.
///
/// # Access Control
/// - `SelfOrAdmin` - The account owner or an account admin
/// - Changing `role` additionally requires an account admin
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to modify this account", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email or username already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    let params = UpdateUserParams::from_dto(payload)?;

    if params.role.is_some() && !caller.is_admin() {
        return Err(AuthError::AccessDenied(
            caller.id,
            "Only administrators can change account roles".to_string(),
        )
        .into());
    }

    let user = UserService::new(&state.db).update_user(id, params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete an account.
///
/// # Access Control
/// - `SelfOrAdmin` - The account owner or an account admin
///
/// # Returns
/// - `400 Bad Request` - The account is the last ADMIN of a team
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 400, description = "User is the last admin of a team", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to delete this account", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    let message = UserService::new(&state.db).delete_user(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new(message))))
}
