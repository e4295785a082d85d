//! Team and membership business rules.
//!
//! Multi-step mutations run inside a transaction. The last-admin rule is enforced by the
//! conditional statements in `TeamMemberRepository`; this service only interprets a
//! refused statement as the matching `InvalidOperation`.

use std::collections::BTreeSet;

use entity::sea_orm_active_enums::TeamRole;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{team::TeamRepository, team_member::TeamMemberRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::team::{
        CreateTeamParams, PaginatedTeams, TeamFilter, TeamMemberWithUser, TeamWithMembers,
        UpdateTeamParams,
    },
};

const TEAM_NOT_FOUND: &str = "Team not found";
const TEAM_NAME_TAKEN: &str = "Team name already exists";
const NOT_A_MEMBER: &str = "User is not a member of this team";

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team with the creator as its first ADMIN.
    ///
    /// The team, the creator's membership and the additional MEMBER rows are inserted in
    /// one transaction. Additional member IDs are deduplicated; the creator and IDs with
    /// no matching user are skipped.
    ///
    /// # Returns
    /// - `Ok(TeamWithMembers)` - The hydrated new team
    /// - `Err(AppError::Conflict)` - Another team already has this name
    pub async fn create(&self, params: CreateTeamParams) -> Result<TeamWithMembers, AppError> {
        let txn = self.db.begin().await?;

        let team = TeamRepository::new(&txn)
            .create(params.name, params.icon, params.description)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, TEAM_NAME_TAKEN))?;

        let member_repo = TeamMemberRepository::new(&txn);
        member_repo
            .create(team.id, params.creator_id, TeamRole::Admin)
            .await?;

        let candidates: Vec<i32> = params
            .member_ids
            .into_iter()
            .filter(|&id| id != params.creator_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let member_ids = UserRepository::new(&txn)
            .find_existing_ids(&candidates)
            .await?;
        member_repo
            .create_many(team.id, &member_ids, TeamRole::Member)
            .await?;

        txn.commit().await?;

        tracing::info!(
            team_id = team.id,
            creator_id = params.creator_id,
            members = member_ids.len(),
            "Created team"
        );

        self.find_one(team.id).await
    }

    /// Lists the teams `user_id` belongs to, newest first.
    pub async fn find_all(
        &self,
        filter: TeamFilter,
        user_id: i32,
    ) -> Result<PaginatedTeams, AppError> {
        let (teams, total) = TeamRepository::new(self.db)
            .get_paginated_for_user(user_id, &filter)
            .await?;

        Ok(PaginatedTeams {
            teams,
            meta: filter.page.meta(total),
        })
    }

    pub async fn find_one(&self, id: i32) -> Result<TeamWithMembers, AppError> {
        TeamRepository::new(self.db)
            .find_with_members(id)
            .await?
            .ok_or_else(|| AppError::NotFound(TEAM_NOT_FOUND.to_string()))
    }

    /// Updates team details.
    ///
    /// Keeping the current name is not a conflict; taking another team's name is.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateTeamParams,
    ) -> Result<TeamWithMembers, AppError> {
        TeamRepository::new(self.db)
            .update(id, params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, TEAM_NAME_TAKEN))?
            .ok_or_else(|| AppError::NotFound(TEAM_NOT_FOUND.to_string()))?;

        tracing::info!(team_id = id, "Updated team");

        self.find_one(id).await
    }

    /// Deletes a team with all of its memberships and tickets.
    pub async fn delete(&self, id: i32) -> Result<String, AppError> {
        let txn = self.db.begin().await?;

        if !TeamRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound(TEAM_NOT_FOUND.to_string()));
        }

        txn.commit().await?;

        tracing::info!(team_id = id, "Deleted team");

        Ok("Team deleted successfully".to_string())
    }

    /// Adds a user to a team, as MEMBER unless another role is given.
    ///
    /// # Returns
    /// - `Ok(TeamMemberWithUser)` - The hydrated new membership
    /// - `Err(AppError::NotFound)` - Team or user does not exist
    /// - `Err(AppError::Conflict)` - The user is already a member
    pub async fn add_member(
        &self,
        team_id: i32,
        user_id: i32,
        role: Option<TeamRole>,
    ) -> Result<TeamMemberWithUser, AppError> {
        if TeamRepository::new(self.db).find_by_id(team_id).await?.is_none() {
            return Err(AppError::NotFound(TEAM_NOT_FOUND.to_string()));
        }

        if UserRepository::new(self.db).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let member_repo = TeamMemberRepository::new(self.db);

        member_repo
            .create(team_id, user_id, role.unwrap_or(TeamRole::Member))
            .await
            .map_err(|e| {
                AppError::conflict_on_unique(e, "User is already a member of this team")
            })?;

        tracing::info!(team_id, user_id, "Added team member");

        member_repo
            .find_with_user(team_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_A_MEMBER.to_string()))
    }

    /// Removes a member from a team, refusing to remove its last ADMIN.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation message
    /// - `Err(AuthError::AccessDenied)` - `requesting_user_id` is not an ADMIN of the team
    /// - `Err(AppError::NotFound)` - Team or membership does not exist
    /// - `Err(AppError::InvalidOperation)` - The member is the team's last ADMIN
    pub async fn remove_member(
        &self,
        team_id: i32,
        user_id: i32,
        requesting_user_id: i32,
    ) -> Result<String, AppError> {
        if !self.is_team_admin(team_id, requesting_user_id).await? {
            return Err(AuthError::AccessDenied(
                requesting_user_id,
                "Only team admins can perform this action".to_string(),
            )
            .into());
        }

        self.delete_membership(
            team_id,
            user_id,
            NOT_A_MEMBER,
            "Cannot remove the last admin. Promote another member to admin first.",
        )
        .await?;

        tracing::info!(team_id, user_id, requesting_user_id, "Removed team member");

        Ok("Member removed successfully".to_string())
    }

    /// Changes a member's team role, refusing to demote the last ADMIN.
    pub async fn update_member_role(
        &self,
        team_id: i32,
        user_id: i32,
        role: TeamRole,
    ) -> Result<TeamMemberWithUser, AppError> {
        let txn = self.db.begin().await?;

        if TeamRepository::new(&txn).find_by_id(team_id).await?.is_none() {
            return Err(AppError::NotFound(TEAM_NOT_FOUND.to_string()));
        }

        let member_repo = TeamMemberRepository::new(&txn);
        let Some(member) = member_repo.find(team_id, user_id).await? else {
            return Err(AppError::NotFound(NOT_A_MEMBER.to_string()));
        };

        if !member_repo
            .update_role_unless_last_admin(team_id, user_id, role)
            .await?
        {
            if member.is_admin() {
                return Err(AppError::InvalidOperation(
                    "Cannot demote the last admin. Promote another member to admin first."
                        .to_string(),
                ));
            }
            return Err(AppError::NotFound(NOT_A_MEMBER.to_string()));
        }

        txn.commit().await?;

        tracing::info!(team_id, user_id, role = ?role, "Updated team member role");

        TeamMemberRepository::new(self.db)
            .find_with_user(team_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_A_MEMBER.to_string()))
    }

    /// Removes the caller's own membership, refusing if they are the last ADMIN.
    pub async fn leave(&self, team_id: i32, user_id: i32) -> Result<String, AppError> {
        self.delete_membership(
            team_id,
            user_id,
            "You are not a member of this team",
            "Cannot leave as the last admin. Promote another member to admin or delete the team.",
        )
        .await?;

        tracing::info!(team_id, user_id, "User left team");

        Ok("Successfully left the team".to_string())
    }

    pub async fn is_team_admin(&self, team_id: i32, user_id: i32) -> Result<bool, AppError> {
        let member = TeamMemberRepository::new(self.db)
            .find(team_id, user_id)
            .await?;

        Ok(member.is_some_and(|member| member.is_admin()))
    }

    pub async fn is_team_member(&self, team_id: i32, user_id: i32) -> Result<bool, AppError> {
        let member = TeamMemberRepository::new(self.db)
            .find(team_id, user_id)
            .await?;

        Ok(member.is_some())
    }

    /// Shared removal path for `remove_member` and `leave`.
    ///
    /// A refused delete on an ADMIN row means the last-admin guard fired; a refused delete
    /// on any other row means the membership vanished concurrently.
    async fn delete_membership(
        &self,
        team_id: i32,
        user_id: i32,
        not_member_message: &str,
        last_admin_message: &str,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if TeamRepository::new(&txn).find_by_id(team_id).await?.is_none() {
            return Err(AppError::NotFound(TEAM_NOT_FOUND.to_string()));
        }

        let member_repo = TeamMemberRepository::new(&txn);
        let Some(member) = member_repo.find(team_id, user_id).await? else {
            return Err(AppError::NotFound(not_member_message.to_string()));
        };

        if !member_repo.delete_unless_last_admin(team_id, user_id).await? {
            if member.is_admin() {
                return Err(AppError::InvalidOperation(last_admin_message.to_string()));
            }
            return Err(AppError::NotFound(not_member_message.to_string()));
        }

        txn.commit().await?;

        Ok(())
    }
}
