//! SeaORM entity definitions for the teamdesk schema.

pub mod prelude;

pub mod sea_orm_active_enums;
pub mod team;
pub mod team_member;
pub mod ticket;
pub mod user;
