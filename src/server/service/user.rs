//! User service for business logic.
//!
//! This module provides the `UserService` for account management. It hashes passwords
//! before they reach the repository, turns unique-index violations into `Conflict`, and
//! keeps the last-admin rule intact when an account is deleted.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{team_member::TeamMemberRepository, ticket::TicketRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParams, PaginatedUsers, UpdateUserParams, User, UserFilter},
    util::password::hash_password,
};

const USER_NOT_FOUND: &str = "User not found";
const USER_TAKEN: &str = "Email or username already in use";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with a hashed password.
    ///
    /// # Arguments
    /// - `params` - Account fields with the plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email or username already in use
    /// - `Err(AppError::PasswordHashErr)` - Hashing failed
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let password = hash_password(&params.password)?;

        let user = UserRepository::new(self.db)
            .create(CreateUserParams { password, ..params })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, USER_TAKEN))?;

        tracing::info!(user_id = user.id, "Created user");

        Ok(user)
    }

    /// Retrieves users matching the filter with pagination metadata.
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn find_all(&self, filter: UserFilter) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(&filter)
            .await?;

        Ok(PaginatedUsers {
            users,
            meta: filter.page.meta(total),
        })
    }

    pub async fn find_user_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Applies a partial update, re-hashing the password when one is provided.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::Conflict)` - New email or username already in use
    pub async fn update_user(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let password = params
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let user = UserRepository::new(self.db)
            .update(id, UpdateUserParams { password, ..params })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, USER_TAKEN))?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        tracing::info!(user_id = id, "Updated user");

        Ok(user)
    }

    /// Deletes an account along with its memberships and authored tickets.
    ///
    /// Each membership is removed through the last-admin guard, so deleting the only
    /// ADMIN of a team is refused just like leaving it would be.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation message
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::InvalidOperation)` - The user is the last ADMIN of a team
    pub async fn delete_user(&self, id: i32) -> Result<String, AppError> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        if user_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        let member_repo = TeamMemberRepository::new(&txn);
        for team_id in member_repo.find_team_ids_for_user(id).await? {
            if !member_repo.delete_unless_last_admin(team_id, id).await? {
                return Err(AppError::InvalidOperation(format!(
                    "User is the last admin of team {}. Promote another member to admin or delete the team first.",
                    team_id
                )));
            }
        }

        TicketRepository::new(&txn).delete_by_author(id).await?;
        user_repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!(user_id = id, "Deleted user");

        Ok("User deleted successfully".to_string())
    }
}
