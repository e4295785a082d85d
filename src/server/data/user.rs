//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records in the database.
//! It handles creation, lookups, filtered pagination, partial updates, and deletion with
//! conversion between entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::contains_literal,
    model::user::{CreateUserParams, SortOrder, UpdateUserParams, User, UserFilter},
};

/// Repository providing database operations for user management.
///
/// Generic over the connection so the same queries run against the pool or inside a
/// transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// `param.password` must already be hashed. Email and username uniqueness is enforced
    /// by the table's unique indexes, so a duplicate surfaces as a constraint violation.
    ///
    /// # Arguments
    /// - `param` - Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(&self, param: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            username: ActiveValue::Set(param.username),
            password: ActiveValue::Set(param.password),
            avatar: ActiveValue::Set(param.avatar.unwrap_or_default()),
            role: ActiveValue::Set(param.role.unwrap_or(entity::sea_orm_active_enums::UserRole::User)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email together with their stored password hash.
    ///
    /// The only query that exposes the hash; used exclusively by login.
    ///
    /// # Returns
    /// - `Ok(Some((User, hash)))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|entity| {
            let hash = entity.password.clone();
            (User::from_entity(entity), hash)
        }))
    }

    /// Returns the subset of `ids` that belong to existing users.
    ///
    /// # Arguments
    /// - `ids` - Candidate user IDs
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Existing IDs in ascending order (empty if `ids` is empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::user::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets users matching the filter with pagination.
    ///
    /// `search` is a substring match on username or email, `role` restricts to one account
    /// role, and results are ordered by username in the requested direction.
    ///
    /// # Arguments
    /// - `filter` - Search, role, sort and page parameters
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and the total match count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(&self, filter: &UserFilter) -> Result<(Vec<User>, u64), DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::user::Column::Username.like(contains_literal(search)))
                    .add(entity::user::Column::Email.like(contains_literal(search))),
            );
        }

        if let Some(role) = filter.role {
            query = query.filter(entity::user::Column::Role.eq(role));
        }

        query = match filter.sort {
            SortOrder::Asc => query.order_by_asc(entity::user::Column::Username),
            SortOrder::Desc => query.order_by_desc(entity::user::Column::Username),
        };

        let paginator = query.paginate(self.db, filter.page.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(filter.page.page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Applies a partial update to a user.
    ///
    /// `param.password`, when present, must already be hashed.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user (unchanged if no fields were provided)
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn update(&self, id: i32, param: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = entity.clone().into();

        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(username) = param.username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(password) = param.password {
            active_model.password = ActiveValue::Set(password);
        }
        if let Some(avatar) = param.avatar {
            active_model.avatar = ActiveValue::Set(avatar);
        }
        if let Some(role) = param.role {
            active_model.role = ActiveValue::Set(role);
        }

        if !active_model.is_changed() {
            return Ok(Some(User::from_entity(entity)));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
