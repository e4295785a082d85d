//! Wire-level request and response types.
//!
//! These DTOs are what the HTTP API accepts and returns. They carry serde and utoipa
//! derives only; conversion to and from server domain models lives next to the domain
//! models in `server::model`.

pub mod api;
pub mod auth;
pub mod team;
pub mod ticket;
pub mod user;
