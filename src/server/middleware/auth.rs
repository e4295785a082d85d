use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::jwt::JwtService,
};

pub enum Permission {
    /// Account role must be ADMIN.
    Admin,
    /// Caller must be the given user or an account ADMIN.
    SelfOrAdmin(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Resolves the bearer token to a user and checks every permission.
    ///
    /// An empty permission list only requires authentication.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user satisfying all permissions
    /// - `Err(AuthError::MissingToken | InvalidToken | UserNotInDatabase)` - Not authenticated
    /// - `Err(AuthError::AccessDenied)` - Authenticated but lacking a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = extract_bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        let claims = self
            .jwt
            .validate(token)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let user_id = claims
            .user_id()
            .ok_or_else(|| AuthError::InvalidToken(format!("non-numeric subject '{}'", claims.sub)))?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Only administrators can perform this action".to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrAdmin(target_id) => {
                    if user.id != *target_id && !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "You can only modify your own account".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; an empty token counts as missing.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
