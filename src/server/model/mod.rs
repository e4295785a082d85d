//! Domain models and operation parameters.
//!
//! Domain types sit between entities and DTOs: repositories convert entities into them
//! via `from_entity`, controllers convert them into DTOs via `into_dto`, and request DTOs
//! become operation params via `from_dto`.

pub mod auth;
pub mod pagination;
pub mod team;
pub mod ticket;
pub mod user;

use crate::server::error::AppError;

/// Rejects blank required strings, returning the trimmed value otherwise.
pub(crate) fn require_non_blank(value: String, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(trimmed.to_string())
}
