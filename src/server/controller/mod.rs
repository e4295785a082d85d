//! HTTP request handlers.
//!
//! Each handler extracts the request, runs the guards it needs, converts DTOs into
//! operation params, calls a service, and converts the result back into a DTO.

pub mod auth;
pub mod team;
pub mod ticket;
pub mod user;
