//! User domain models and parameters.
//!
//! Provides the account model shared by every service plus the public projection embedded
//! in team responses. The stored password hash never leaves the data layer except through
//! `UserRepository::find_credentials_by_email`.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::{
    model::user::{
        CreateUserDto, PaginatedUsersDto, PublicUserDto, SortOrderDto, UpdateUserDto, UserDto,
        UserRoleDto,
    },
    server::{
        error::AppError,
        model::{
            pagination::{PageRequest, PaginationMeta},
            require_non_blank,
        },
    },
};

impl From<UserRole> for UserRoleDto {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::User => Self::User,
            UserRole::Admin => Self::Admin,
        }
    }
}

impl From<UserRoleDto> for UserRole {
    fn from(role: UserRoleDto) -> Self {
        match role {
            UserRoleDto::User => Self::User,
            UserRoleDto::Admin => Self::Admin,
        }
    }
}

/// Application account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub avatar: String,
    /// Account-level role, unrelated to team roles.
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            username: self.username,
            avatar: self.avatar,
            role: self.role.into(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password column is dropped here.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            avatar: entity.avatar,
            role: entity.role,
            created_at: entity.created_at,
        }
    }
}

/// Public projection of a user embedded in hydrated teams and memberships.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicUser {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub avatar: String,
}

impl PublicUser {
    pub fn into_dto(self) -> PublicUserDto {
        PublicUserDto {
            id: self.id,
            email: self.email,
            username: self.username,
            avatar: self.avatar,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            avatar: entity.avatar,
        }
    }
}

/// Parameters for creating an account.
///
/// `password` is plaintext here; the user service hashes it before it reaches the
/// repository.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub username: String,
    pub password: String,
    pub avatar: Option<String>,
    pub role: Option<UserRole>,
}

impl CreateUserParams {
    /// Validates and converts a create request.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - All required fields present
    /// - `Err(AppError::BadRequest)` - Blank field or malformed email
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            email: validate_email(dto.email)?,
            username: require_non_blank(dto.username, "username")?,
            password: validate_password(dto.password)?,
            avatar: dto.avatar,
            role: dto.role.map(UserRole::from),
        })
    }
}

/// Partial account update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<UserRole>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            email: dto.email.map(validate_email).transpose()?,
            username: dto
                .username
                .map(|username| require_non_blank(username, "username"))
                .transpose()?,
            password: dto.password.map(validate_password).transpose()?,
            avatar: dto.avatar,
            role: dto.role.map(UserRole::from),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl From<SortOrderDto> for SortOrder {
    fn from(sort: SortOrderDto) -> Self {
        match sort {
            SortOrderDto::Asc => Self::Asc,
            SortOrderDto::Desc => Self::Desc,
        }
    }
}

/// Filters for paginated user listing.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Substring matched against username or email.
    pub search: Option<String>,
    pub page: PageRequest,
    /// Ordering by username.
    pub sort: SortOrder,
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub meta: PaginationMeta,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            data: self.users.into_iter().map(User::into_dto).collect(),
            meta: self.meta.into_dto(),
        }
    }
}

fn validate_email(email: String) -> Result<String, AppError> {
    let email = require_non_blank(email, "email")?;

    if !email.contains('@') {
        return Err(AppError::BadRequest("email must be a valid address".to_string()));
    }

    Ok(email)
}

fn validate_password(password: String) -> Result<String, AppError> {
    if password.is_empty() {
        return Err(AppError::BadRequest("password must not be empty".to_string()));
    }

    Ok(password)
}
