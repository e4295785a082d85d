//! Ticket data repository.

use chrono::Utc;
use entity::sea_orm_active_enums::TicketStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::ticket::{CreateTicketParams, Ticket};

pub struct TicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a ticket authored by `author_id`, defaulting the status to OPEN.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The created ticket
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, author_id: i32, param: CreateTicketParams) -> Result<Ticket, DbErr> {
        let entity = entity::ticket::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            status: ActiveValue::Set(param.status.unwrap_or(TicketStatus::Open)),
            author_id: ActiveValue::Set(author_id),
            team_id: ActiveValue::Set(param.team_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ticket::from_entity(entity))
    }

    /// Gets every ticket belonging to any of the given teams, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Ticket>)` - Matching tickets (empty if `team_ids` is empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_team_ids(&self, team_ids: &[i32]) -> Result<Vec<Ticket>, DbErr> {
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::TeamId.is_in(team_ids.iter().copied()))
            .order_by_desc(entity::ticket::Column::CreatedAt)
            .order_by_desc(entity::ticket::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ticket::from_entity).collect())
    }

    /// Deletes every ticket authored by `author_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of tickets deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_author(&self, author_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Ticket::delete_many()
            .filter(entity::ticket::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
