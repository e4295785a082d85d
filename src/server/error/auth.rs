use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature, expiry, or subject validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// The token is valid but its subject no longer exists.
    ///
    /// Typically the account was deleted after the token was issued.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Login attempt with an unknown email or a wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The authenticated caller lacks the required team role or account role.
    ///
    /// # Fields
    /// - User ID that was denied
    /// - Client-facing reason
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized with "Unauthorized"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid credentials"
/// - `AccessDenied` → 403 Forbidden with the denial reason
///
/// Token problems are logged at debug level while the client only sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!(user_id, "Access denied: {}", reason);

                (StatusCode::FORBIDDEN, Json(ErrorDto { error: reason })).into_response()
            }
        }
    }
}
