use crate::server::{
    data::user::UserRepository,
    model::{
        pagination::PageRequest,
        user::{CreateUserParams, SortOrder, UpdateUserParams, UserFilter},
    },
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all_paginated;
