//! Team membership and team admin guards.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::team_member::TeamMemberRepository,
    error::{auth::AuthError, AppError},
    model::team::{Team, TeamMember},
};

/// Membership and team resolved by a successful team guard check.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamAccess {
    pub membership: TeamMember,
    pub team: Team,
}

pub struct TeamGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requires the user to be a member of the team.
    ///
    /// Teams the user does not belong to are reported as not found, so the response does
    /// not reveal whether the team exists.
    ///
    /// # Returns
    /// - `Ok(TeamAccess)` - Membership and team
    /// - `Err(AuthError::MissingToken)` - No authenticated user
    /// - `Err(AppError::MissingParameter)` - No team ID in the request
    /// - `Err(AppError::NotFound)` - No such membership
    pub async fn require_member(
        &self,
        user_id: Option<i32>,
        team_id: Option<i32>,
    ) -> Result<TeamAccess, AppError> {
        let Some(user_id) = user_id else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(team_id) = team_id else {
            return Err(AppError::MissingParameter("Team ID not provided".to_string()));
        };

        let Some((membership, team)) = TeamMemberRepository::new(self.db)
            .find_with_team(team_id, user_id)
            .await?
        else {
            tracing::debug!(user_id, team_id, "Team access denied: not a member");
            return Err(AppError::NotFound(
                "Team not found or user is not a member".to_string(),
            ));
        };

        Ok(TeamAccess { membership, team })
    }

    /// Requires the user to be an ADMIN member of the team.
    ///
    /// Same preconditions as `require_member`.
    ///
    /// # Returns
    /// - `Ok(TeamAccess)` - Admin membership and team
    /// - `Err(AuthError::AccessDenied)` - Member without the ADMIN role
    pub async fn require_admin(
        &self,
        user_id: Option<i32>,
        team_id: Option<i32>,
    ) -> Result<TeamAccess, AppError> {
        let access = self.require_member(user_id, team_id).await?;

        if !access.membership.is_admin() {
            tracing::debug!(
                user_id = access.membership.user_id,
                team_id = access.team.id,
                "Team admin access denied"
            );
            return Err(AuthError::AccessDenied(
                access.membership.user_id,
                "Only team admins can perform this action".to_string(),
            )
            .into());
        }

        Ok(access)
    }
}
