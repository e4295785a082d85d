use entity::sea_orm_active_enums::{TeamRole, TicketStatus, UserRole};
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        auth::LoginParams,
        pagination::PageRequest,
        team::{CreateTeamParams, TeamFilter, UpdateTeamParams},
        ticket::CreateTicketParams,
        user::{CreateUserParams, UpdateUserParams},
    },
    service::{auth::AuthService, team::TeamService, ticket::TicketService, user::UserService},
    util::jwt::{JwtConfig, JwtService},
};
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod ticket;

fn create_team_params(name: &str, creator_id: i32, member_ids: Vec<i32>) -> CreateTeamParams {
    CreateTeamParams {
        name: name.to_string(),
        icon: None,
        description: None,
        creator_id,
        member_ids,
    }
}

fn create_user_params(email: &str, username: &str, password: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        username: username.to_string(),
        password: password.to_string(),
        avatar: None,
        role: None,
    }
}
