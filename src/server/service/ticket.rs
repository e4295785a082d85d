use sea_orm::DatabaseConnection;

use crate::server::{
    data::{team_member::TeamMemberRepository, ticket::TicketRepository},
    error::{auth::AuthError, AppError},
    model::ticket::{CreateTicketParams, Ticket},
    service::team::TeamService,
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a ticket in a team the user belongs to.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The created ticket, OPEN unless another status was given
    /// - `Err(AppError::AuthErr(AccessDenied))` - The user is not a member of the team
    pub async fn create_ticket(
        &self,
        user_id: i32,
        params: CreateTicketParams,
    ) -> Result<Ticket, AppError> {
        let is_member = TeamService::new(self.db)
            .is_team_member(params.team_id, user_id)
            .await?;

        if !is_member {
            return Err(AuthError::AccessDenied(
                user_id,
                "You are not part of this team".to_string(),
            )
            .into());
        }

        let ticket = TicketRepository::new(self.db).create(user_id, params).await?;

        tracing::info!(
            ticket_id = ticket.id,
            team_id = ticket.team_id,
            author_id = user_id,
            "Created ticket"
        );

        Ok(ticket)
    }

    /// Lists tickets visible to the user, newest first.
    ///
    /// Without `team_id` this covers every team the user belongs to. An explicit
    /// `team_id` outside that set is refused rather than returning an empty list.
    pub async fn get_tickets(
        &self,
        user_id: i32,
        team_id: Option<i32>,
    ) -> Result<Vec<Ticket>, AppError> {
        let allowed_teams = TeamMemberRepository::new(self.db)
            .find_team_ids_for_user(user_id)
            .await?;

        let team_ids = match team_id {
            Some(team_id) if !allowed_teams.contains(&team_id) => {
                return Err(AuthError::AccessDenied(
                    user_id,
                    "Cannot access tickets of this team".to_string(),
                )
                .into());
            }
            Some(team_id) => vec![team_id],
            None => allowed_teams,
        };

        let tickets = TicketRepository::new(self.db)
            .find_by_team_ids(&team_ids)
            .await?;

        Ok(tickets)
    }
}
