use crate::{
    model::auth::{AuthResponseDto, LoginDto, RegisterDto},
    model::user::CreateUserDto,
    server::{
        error::AppError,
        model::user::{CreateUserParams, User},
    },
};

/// Successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub user: User,
}

impl AuthSession {
    pub fn into_dto(self) -> AuthResponseDto {
        AuthResponseDto {
            access_token: self.access_token,
            user: self.user.into_dto(),
        }
    }
}

/// Self-service registration always creates a USER account.
pub fn register_params_from_dto(dto: RegisterDto) -> Result<CreateUserParams, AppError> {
    CreateUserParams::from_dto(CreateUserDto {
        email: dto.email,
        username: dto.username,
        password: dto.password,
        avatar: None,
        role: None,
    })
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            password: dto.password,
        }
    }
}
