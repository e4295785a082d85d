//! Ticket factory for creating test ticket entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::TicketStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets.
///
/// The team and author must already exist; membership is not checked here.
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    author_id: i32,
    title: String,
    description: String,
    status: TicketStatus,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Ticket {id}"`
    /// - description: `"Description {id}"`
    /// - status: `TicketStatus::Open`
    pub fn new(db: &'a DatabaseConnection, team_id: i32, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            author_id,
            title: format!("Ticket {}", id),
            description: format!("Description {}", id),
            status: TicketStatus::Open,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn status(mut self, status: TicketStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            author_id: ActiveValue::Set(self.author_id),
            team_id: ActiveValue::Set(self.team_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an OPEN ticket in `team_id` authored by `author_id`.
pub async fn create_ticket(
    db: &DatabaseConnection,
    team_id: i32,
    author_id: i32,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, team_id, author_id).build().await
}
