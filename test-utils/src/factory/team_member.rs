//! Membership factory for linking users to teams.

use chrono::Utc;
use entity::sea_orm_active_enums::TeamRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a membership row for `(team_id, user_id)` with the given role.
///
/// Both the team and the user must already exist.
pub async fn create_membership(
    db: &DatabaseConnection,
    team_id: i32,
    user_id: i32,
    role: TeamRole,
) -> Result<entity::team_member::Model, DbErr> {
    entity::team_member::ActiveModel {
        team_id: ActiveValue::Set(team_id),
        user_id: ActiveValue::Set(user_id),
        role: ActiveValue::Set(role),
        joined_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Shorthand for `create_membership(db, team_id, user_id, TeamRole::Admin)`.
pub async fn create_admin_membership(
    db: &DatabaseConnection,
    team_id: i32,
    user_id: i32,
) -> Result<entity::team_member::Model, DbErr> {
    create_membership(db, team_id, user_id, TeamRole::Admin).await
}
