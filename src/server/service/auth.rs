//! Registration and login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::{AuthSession, LoginParams},
        user::{CreateUserParams, User},
    },
    service::user::UserService,
    util::{jwt::JwtService, password::verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService) -> Self {
        Self { db, jwt }
    }

    /// Creates a USER account and signs a token for it.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Token and the new user
    /// - `Err(AppError::Conflict)` - Email or username already in use
    pub async fn register(&self, params: CreateUserParams) -> Result<AuthSession, AppError> {
        let user = UserService::new(self.db).create(params).await?;

        self.issue(user)
    }

    /// Verifies credentials and signs a token.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Token and the authenticated user
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Credentials rejected
    pub async fn login(&self, params: LoginParams) -> Result<AuthSession, AppError> {
        let credentials = UserRepository::new(self.db)
            .find_credentials_by_email(&params.email)
            .await?;

        let Some((user, hash)) = credentials else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&params.password, &hash) {
            tracing::debug!(user_id = user.id, "Rejected login with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = user.id, "User logged in");

        self.issue(user)
    }

    fn issue(&self, user: User) -> Result<AuthSession, AppError> {
        let access_token = self.jwt.generate(&user)?;

        Ok(AuthSession { access_token, user })
    }
}
