use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::TicketStatus;

use crate::{
    model::ticket::{CreateTicketDto, TicketDto, TicketStatusDto},
    server::{error::AppError, model::require_non_blank},
};

impl From<TicketStatus> for TicketStatusDto {
    fn from(status: TicketStatus) -> Self {
        match status {
            TicketStatus::Open => Self::Open,
            TicketStatus::InProgress => Self::InProgress,
            TicketStatus::Resolved => Self::Resolved,
            TicketStatus::Closed => Self::Closed,
        }
    }
}

impl From<TicketStatusDto> for TicketStatus {
    fn from(status: TicketStatusDto) -> Self {
        match status {
            TicketStatusDto::Open => Self::Open,
            TicketStatusDto::InProgress => Self::InProgress,
            TicketStatusDto::Resolved => Self::Resolved,
            TicketStatusDto::Closed => Self::Closed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub author_id: i32,
    pub team_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            title: self.title,
            description: self.description,
            status: self.status.into(),
            author_id: self.author_id,
            team_id: self.team_id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::ticket::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            status: entity.status,
            author_id: entity.author_id,
            team_id: entity.team_id,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for opening a ticket. Status defaults to OPEN when `None`.
#[derive(Debug, Clone)]
pub struct CreateTicketParams {
    pub title: String,
    pub description: String,
    pub status: Option<TicketStatus>,
    pub team_id: i32,
}

impl CreateTicketParams {
    pub fn from_dto(dto: CreateTicketDto) -> Result<Self, AppError> {
        Ok(Self {
            title: require_non_blank(dto.title, "title")?,
            description: dto.description,
            status: dto.status.map(TicketStatus::from),
            team_id: dto.team_id,
        })
    }
}
