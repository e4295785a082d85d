//! Team membership repository.
//!
//! Provides `TeamMemberRepository` for membership lookups and mutations. Removal and
//! demotion are guarded in SQL so that a team never loses its last ADMIN. The admin count
//! and the mutation are one statement.

use chrono::Utc;
use entity::sea_orm_active_enums::TeamRole;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QuerySelect, QueryTrait,
};

use crate::server::model::{
    team::{Team, TeamMember, TeamMemberWithUser},
    user::PublicUser,
};

pub struct TeamMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a membership.
    ///
    /// The composite primary key `(team_id, user_id)` rejects duplicates.
    ///
    /// # Returns
    /// - `Ok(TeamMember)` - The created membership
    /// - `Err(DbErr)` - Database error, including a primary key violation for an existing
    ///   membership or a foreign key violation for a missing team or user
    pub async fn create(
        &self,
        team_id: i32,
        user_id: i32,
        role: TeamRole,
    ) -> Result<TeamMember, DbErr> {
        let entity = entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(TeamMember::from_entity(entity))
    }

    /// Inserts memberships for several users with the same role.
    ///
    /// # Returns
    /// - `Ok(())` - All memberships created (returns early if `user_ids` is empty)
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_many(
        &self,
        team_id: i32,
        user_ids: &[i32],
        role: TeamRole,
    ) -> Result<(), DbErr> {
        if user_ids.is_empty() {
            return Ok(());
        }

        let joined_at = Utc::now();
        let models = user_ids.iter().map(|&user_id| entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role),
            joined_at: ActiveValue::Set(joined_at),
        });

        entity::prelude::TeamMember::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds the membership of `user_id` in `team_id`.
    pub async fn find(&self, team_id: i32, user_id: i32) -> Result<Option<TeamMember>, DbErr> {
        let entity = entity::prelude::TeamMember::find_by_id((team_id, user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(TeamMember::from_entity))
    }

    /// Finds a membership together with its team in one query.
    ///
    /// # Returns
    /// - `Ok(Some((TeamMember, Team)))` - The user is a member of the team
    /// - `Ok(None)` - No such membership (or no such team)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_team(
        &self,
        team_id: i32,
        user_id: i32,
    ) -> Result<Option<(TeamMember, Team)>, DbErr> {
        let row = entity::prelude::TeamMember::find_by_id((team_id, user_id))
            .find_also_related(entity::prelude::Team)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(membership, team)| {
            team.map(|team| (TeamMember::from_entity(membership), Team::from_entity(team)))
        }))
    }

    /// Finds a membership hydrated with the member's public profile.
    pub async fn find_with_user(
        &self,
        team_id: i32,
        user_id: i32,
    ) -> Result<Option<TeamMemberWithUser>, DbErr> {
        let row = entity::prelude::TeamMember::find_by_id((team_id, user_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(membership, user)| {
            user.map(|user| TeamMemberWithUser {
                membership: TeamMember::from_entity(membership),
                user: PublicUser::from_entity(user),
            })
        }))
    }

    /// Gets the IDs of every team the user belongs to.
    pub async fn find_team_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::TeamMember::find()
            .select_only()
            .column(entity::team_member::Column::TeamId)
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Deletes a membership unless it is the team's last ADMIN.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership deleted
    /// - `Ok(false)` - Nothing deleted: either no such membership, or the target is the
    ///   only ADMIN of the team
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_unless_last_admin(&self, team_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TeamMember::delete_many()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .filter(Self::keeps_an_admin(team_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Changes a member's role unless that would demote the team's last ADMIN.
    ///
    /// Promotions and same-role updates always apply.
    ///
    /// # Returns
    /// - `Ok(true)` - Role updated
    /// - `Ok(false)` - Nothing updated: either no such membership, or the change would
    ///   demote the only ADMIN of the team
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_role_unless_last_admin(
        &self,
        team_id: i32,
        user_id: i32,
        role: TeamRole,
    ) -> Result<bool, DbErr> {
        let mut update = entity::prelude::TeamMember::update_many()
            .col_expr(entity::team_member::Column::Role, Expr::value(role))
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::UserId.eq(user_id));

        if role != TeamRole::Admin {
            update = update.filter(Self::keeps_an_admin(team_id));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Row filter that only matches when removing the row's ADMIN role leaves at least one
    /// other ADMIN: the row is not an ADMIN, or the team has more than one ADMIN.
    fn keeps_an_admin(team_id: i32) -> Condition {
        let teams_with_spare_admin = entity::prelude::TeamMember::find()
            .select_only()
            .column(entity::team_member::Column::TeamId)
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::Role.eq(TeamRole::Admin))
            .group_by(entity::team_member::Column::TeamId)
            .having(Expr::expr(Func::count(Expr::col(entity::team_member::Column::UserId))).gt(1))
            .into_query();

        Condition::any()
            .add(entity::team_member::Column::Role.ne(TeamRole::Admin))
            .add(entity::team_member::Column::TeamId.in_subquery(teams_with_spare_admin))
    }
}
