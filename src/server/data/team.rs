//! Team data repository for database operations.
//!
//! Provides `TeamRepository` for creating, querying, updating and deleting teams. Read
//! operations return teams hydrated with their memberships and each member's public
//! profile.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::server::{
    data::contains_literal,
    model::{
        team::{
            Team, TeamFilter, TeamMember, TeamMemberWithUser, TeamWithMembers, UpdateTeamParams,
        },
        user::PublicUser,
    },
};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new team without any members.
    ///
    /// Name uniqueness is enforced by the table's unique index.
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(DbErr)` - Database error, including a unique violation on `name`
    pub async fn create(
        &self,
        name: String,
        icon: Option<String>,
        description: Option<String>,
    ) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            name: ActiveValue::Set(name),
            icon: ActiveValue::Set(icon),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    /// Finds a team by ID without loading members.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Finds a team by ID hydrated with its members.
    ///
    /// # Returns
    /// - `Ok(Some(TeamWithMembers))` - Team found
    /// - `Ok(None)` - No team with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_members(&self, id: i32) -> Result<Option<TeamWithMembers>, DbErr> {
        let Some(team) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut members = self.load_members(&[team.id]).await?;

        Ok(Some(TeamWithMembers {
            members: members.remove(&team.id).unwrap_or_default(),
            team,
        }))
    }

    /// Gets the teams a user belongs to with pagination.
    ///
    /// Only teams with a membership row for `user_id` are considered. `search` is a
    /// substring match on name or description. Newest teams come first.
    ///
    /// # Arguments
    /// - `user_id` - Member whose teams are listed
    /// - `filter` - Search and page parameters
    ///
    /// # Returns
    /// - `Ok((teams, total))` - Hydrated teams for the requested page and total match count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated_for_user(
        &self,
        user_id: i32,
        filter: &TeamFilter,
    ) -> Result<(Vec<TeamWithMembers>, u64), DbErr> {
        let member_team_ids = entity::prelude::TeamMember::find()
            .select_only()
            .column(entity::team_member::Column::TeamId)
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .into_query();

        let mut query = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.in_subquery(member_team_ids));

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::team::Column::Name.like(contains_literal(search)))
                    .add(entity::team::Column::Description.like(contains_literal(search))),
            );
        }

        let paginator = query
            .order_by_desc(entity::team::Column::CreatedAt)
            .order_by_desc(entity::team::Column::Id)
            .paginate(self.db, filter.page.limit);

        let total = paginator.num_items().await?;
        let teams: Vec<Team> = paginator
            .fetch_page(filter.page.page)
            .await?
            .into_iter()
            .map(Team::from_entity)
            .collect();

        let team_ids: Vec<i32> = teams.iter().map(|team| team.id).collect();
        let mut members = self.load_members(&team_ids).await?;

        let teams = teams
            .into_iter()
            .map(|team| TeamWithMembers {
                members: members.remove(&team.id).unwrap_or_default(),
                team,
            })
            .collect();

        Ok((teams, total))
    }

    /// Applies a partial update to a team.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - The updated team (unchanged if no fields were provided)
    /// - `Ok(None)` - No team with that ID
    /// - `Err(DbErr)` - Database error, including a unique violation on `name`
    pub async fn update(&self, id: i32, param: UpdateTeamParams) -> Result<Option<Team>, DbErr> {
        let Some(entity) = entity::prelude::Team::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::team::ActiveModel = entity.clone().into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(icon) = param.icon {
            active_model.icon = ActiveValue::Set(Some(icon));
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }

        if !active_model.is_changed() {
            return Ok(Some(Team::from_entity(entity)));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Team::from_entity(entity)))
    }

    /// Deletes a team along with its tickets and memberships.
    ///
    /// Children are removed explicitly because SQLite only enforces cascades with the
    /// `foreign_keys` pragma enabled. Run inside a transaction so the three deletes
    /// commit together.
    ///
    /// # Returns
    /// - `Ok(true)` - Team deleted
    /// - `Ok(false)` - No team with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::Ticket::delete_many()
            .filter(entity::ticket::Column::TeamId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::TeamMember::delete_many()
            .filter(entity::team_member::Column::TeamId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads memberships with member profiles for the given teams, keyed by team ID.
    ///
    /// Members within a team are ordered by join time.
    async fn load_members(
        &self,
        team_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<TeamMemberWithUser>>, DbErr> {
        let mut members: HashMap<i32, Vec<TeamMemberWithUser>> = HashMap::new();

        if team_ids.is_empty() {
            return Ok(members);
        }

        let rows = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.is_in(team_ids.iter().copied()))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::team_member::Column::JoinedAt)
            .order_by_asc(entity::team_member::Column::UserId)
            .all(self.db)
            .await?;

        for (membership, user) in rows {
            let Some(user) = user else {
                continue;
            };

            members
                .entry(membership.team_id)
                .or_default()
                .push(TeamMemberWithUser {
                    membership: TeamMember::from_entity(membership),
                    user: PublicUser::from_entity(user),
                });
        }

        Ok(members)
    }
}
