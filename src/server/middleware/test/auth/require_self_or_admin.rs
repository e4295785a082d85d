use super::*;

/// Tests a user acting on their own account.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_self() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let user = factory::create_user(db).await?;
    let headers = bearer_for(&jwt, &user);

    let returned = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::SelfOrAdmin(user.id)])
        .await?;

    assert_eq!(returned.id, user.id);

    Ok(())
}

/// Tests a user acting on somebody else's account.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let headers = bearer_for(&jwt, &user);

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::SelfOrAdmin(other.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an account ADMIN acting on somebody else's account.
///
/// Expected: Ok(User) for the admin
#[tokio::test]
async fn grants_access_to_admin_for_other_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let admin = factory::user::UserFactory::new(db)
        .role(UserRole::Admin)
        .build()
        .await?;
    let other = factory::create_user(db).await?;
    let headers = bearer_for(&jwt, &admin);

    let returned = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::SelfOrAdmin(other.id)])
        .await?;

    assert_eq!(returned.id, admin.id);

    Ok(())
}
