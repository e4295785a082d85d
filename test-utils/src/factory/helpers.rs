//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use entity::sea_orm_active_enums::TeamRole;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive unique emails, usernames and team names across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a team in which that user is the only ADMIN.
///
/// Mirrors what team creation does in the application: the creator always
/// becomes the first ADMIN member.
///
/// # Returns
/// - `Ok((user, team))` - The admin user and the team
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_admin(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::team::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let team = crate::factory::team::create_team(db).await?;
    crate::factory::team_member::create_membership(db, team.id, user.id, TeamRole::Admin).await?;

    Ok((user, team))
}

/// Creates a team with one ADMIN and one MEMBER.
///
/// # Returns
/// - `Ok((admin, member, team))` - Both users and the team
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_admin_and_member(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::team::Model,
    ),
    DbErr,
> {
    let (admin, team) = create_team_with_admin(db).await?;
    let member = crate::factory::user::create_user(db).await?;
    crate::factory::team_member::create_membership(db, team.id, member.id, TeamRole::Member)
        .await?;

    Ok((admin, member, team))
}
