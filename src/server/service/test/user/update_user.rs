use super::*;
use crate::server::util::password::verify_password;

/// Tests changing username and password.
///
/// Expected: new username returned, new password stored as a verifying hash
#[tokio::test]
async fn updates_fields_and_rehashes_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserService::new(db)
        .update_user(
            user.id,
            UpdateUserParams {
                username: Some("renamed".to_string()),
                password: Some("new-password".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.email, user.email);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(verify_password("new-password", &stored.password));

    Ok(())
}

/// Tests updating a missing user and taking another user's email.
///
/// Expected: Err(AppError::NotFound) and Err(AppError::Conflict)
#[tokio::test]
async fn rejects_missing_user_and_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let service = UserService::new(db);

    let missing = service
        .update_user(
            9999,
            UpdateUserParams {
                username: Some("ghost".to_string()),
                ..Default::default()
            },
        )
        .await;
    let taken = service
        .update_user(
            user.id,
            UpdateUserParams {
                email: Some(other.email.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(missing, Err(AppError::NotFound(_))));
    assert!(matches!(taken, Err(AppError::Conflict(_))));

    Ok(())
}
