use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    factory::user::UserFactory::new(db)
        .username("charlie")
        .email("charlie@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("alice")
        .email("alice@corp.test")
        .role(UserRole::Admin)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("bob")
        .email("bob@example.com")
        .build()
        .await?;

    Ok(())
}

/// Tests ordering by username in both directions.
///
/// Expected: ascending alice, bob, charlie; descending the reverse
#[tokio::test]
async fn orders_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = UserRepository::new(db);

    let (asc, total) = repo.get_all_paginated(&UserFilter::default()).await?;
    let (desc, _) = repo
        .get_all_paginated(&UserFilter {
            sort: SortOrder::Desc,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 3);
    let asc: Vec<_> = asc.iter().map(|u| u.username.as_str()).collect();
    let desc: Vec<_> = desc.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(asc, vec!["alice", "bob", "charlie"]);
    assert_eq!(desc, vec!["charlie", "bob", "alice"]);

    Ok(())
}

/// Tests search across username and email.
///
/// Verifies that a term matching only an email still finds the user.
///
/// Expected: only users whose username or email contains the term
#[tokio::test]
async fn searches_username_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = UserRepository::new(db);

    let (by_email, total) = repo
        .get_all_paginated(&UserFilter {
            search: Some("corp".to_string()),
            ..Default::default()
        })
        .await?;
    let (by_username, _) = repo
        .get_all_paginated(&UserFilter {
            search: Some("bo".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(by_email[0].username, "alice");
    assert_eq!(by_username.len(), 1);
    assert_eq!(by_username[0].username, "bob");

    Ok(())
}

/// Tests filtering by account role.
///
/// Expected: only ADMIN accounts
#[tokio::test]
async fn filters_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let (users, total) = UserRepository::new(db)
        .get_all_paginated(&UserFilter {
            role: Some(UserRole::Admin),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(users[0].username, "alice");

    Ok(())
}

/// Tests offset pagination.
///
/// Verifies that the second page of size two holds the remaining user while the total
/// still counts every match.
///
/// Expected: one user on page 1, total 3
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let (users, total) = UserRepository::new(db)
        .get_all_paginated(&UserFilter {
            page: PageRequest { page: 1, limit: 2 },
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 3);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "charlie");

    Ok(())
}

/// Tests that an underscore in the search term is not a single-character wildcard.
///
/// Expected: "jo_e" finds only the user whose username contains it literally
#[tokio::test]
async fn search_treats_underscore_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("joxe")
        .email("joxe@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("jo_e")
        .email("joe@example.com")
        .build()
        .await?;

    let (users, total) = UserRepository::new(db)
        .get_all_paginated(&UserFilter {
            search: Some("jo_e".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(users[0].username, "jo_e");

    Ok(())
}
