//! Team and membership domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::TeamRole;

use crate::{
    model::team::{
        CreateTeamDto, PaginatedTeamsDto, TeamDto, TeamMemberDto, TeamRoleDto, UpdateTeamDto,
    },
    server::{
        error::AppError,
        model::{
            pagination::{PageRequest, PaginationMeta},
            require_non_blank,
            user::PublicUser,
        },
    },
};

impl From<TeamRole> for TeamRoleDto {
    fn from(role: TeamRole) -> Self {
        match role {
            TeamRole::Admin => Self::Admin,
            TeamRole::Member => Self::Member,
        }
    }
}

impl From<TeamRoleDto> for TeamRole {
    fn from(role: TeamRoleDto) -> Self {
        match role {
            TeamRoleDto::Admin => Self::Admin,
            TeamRoleDto::Member => Self::Member,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    /// Unique, case-sensitive team name.
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            icon: entity.icon,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}

/// A user's membership of a team together with their team role.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub team_id: i32,
    pub user_id: i32,
    pub role: TeamRole,
    pub joined_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn is_admin(&self) -> bool {
        self.role == TeamRole::Admin
    }

    pub fn from_entity(entity: entity::team_member::Model) -> Self {
        Self {
            team_id: entity.team_id,
            user_id: entity.user_id,
            role: entity.role,
            joined_at: entity.joined_at,
        }
    }
}

/// Membership hydrated with the member's public profile.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMemberWithUser {
    pub membership: TeamMember,
    pub user: PublicUser,
}

impl TeamMemberWithUser {
    pub fn into_dto(self) -> TeamMemberDto {
        TeamMemberDto {
            team_id: self.membership.team_id,
            user_id: self.membership.user_id,
            role: self.membership.role.into(),
            joined_at: self.membership.joined_at,
            user: self.user.into_dto(),
        }
    }
}

/// Team hydrated with every membership and member profile.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamWithMembers {
    pub team: Team,
    pub members: Vec<TeamMemberWithUser>,
}

impl TeamWithMembers {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.team.id,
            name: self.team.name,
            icon: self.team.icon,
            description: self.team.description,
            created_at: self.team.created_at,
            members: self
                .members
                .into_iter()
                .map(TeamMemberWithUser::into_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a team.
///
/// The creator becomes the team's first ADMIN; `member_ids` are added as MEMBER after
/// deduplication, skipping the creator and unknown users.
#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub creator_id: i32,
    pub member_ids: Vec<i32>,
}

impl CreateTeamParams {
    pub fn from_dto(dto: CreateTeamDto, creator_id: i32) -> Result<Self, AppError> {
        Ok(Self {
            name: require_non_blank(dto.name, "name")?,
            icon: dto.icon,
            description: dto.description,
            creator_id,
            member_ids: dto.member_ids,
        })
    }
}

/// Partial team update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamParams {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
}

impl UpdateTeamParams {
    pub fn from_dto(dto: UpdateTeamDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto
                .name
                .map(|name| require_non_blank(name, "name"))
                .transpose()?,
            icon: dto.icon,
            description: dto.description,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamFilter {
    /// Substring matched against name or description.
    pub search: Option<String>,
    pub page: PageRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedTeams {
    pub teams: Vec<TeamWithMembers>,
    pub meta: PaginationMeta,
}

impl PaginatedTeams {
    pub fn into_dto(self) -> PaginatedTeamsDto {
        PaginatedTeamsDto {
            data: self.teams.into_iter().map(TeamWithMembers::into_dto).collect(),
            meta: self.meta.into_dto(),
        }
    }
}
