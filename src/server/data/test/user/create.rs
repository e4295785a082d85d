use super::*;

fn params(email: &str, username: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        username: username.to_string(),
        password: "$argon2id$placeholder".to_string(),
        avatar: None,
        role: None,
    }
}

/// Tests creating a user with defaults.
///
/// Verifies that avatar defaults to empty and role defaults to USER.
///
/// Expected: Ok(User) with default avatar and role
#[tokio::test]
async fn creates_user_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("jane@example.com", "jane")).await?;

    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.username, "jane");
    assert_eq!(user.avatar, "");
    assert_eq!(user.role, UserRole::User);

    Ok(())
}

/// Tests creating a user with an email that is already taken.
///
/// Verifies that the unique index surfaces as a unique constraint violation.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("jane@example.com", "jane")).await?;

    let err = repo
        .create(params("jane@example.com", "jane2"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests creating a user with a username that is already taken.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("jane@example.com", "jane")).await?;

    let err = repo
        .create(params("other@example.com", "jane"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
