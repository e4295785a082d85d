//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take care of unique column values (emails,
//! usernames, team names) so tests can create as many rows as they need.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let team = factory::team::create_team(&db).await?;
//!
//!     // Team with its creator as ADMIN
//!     let (admin, team) = factory::helpers::create_team_with_admin(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `team` - Create team entities
//! - `team_member` - Create membership rows
//! - `ticket` - Create ticket entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod team;
pub mod team_member;
pub mod ticket;
pub mod user;

pub use team::create_team;
pub use team_member::{create_admin_membership, create_membership};
pub use ticket::create_ticket;
pub use user::create_user;
