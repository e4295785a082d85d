use super::*;

/// Tests creating a team.
///
/// Expected: Ok(Team) with the given fields
#[tokio::test]
async fn creates_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = TeamRepository::new(db)
        .create(
            "Eng".to_string(),
            Some("gear".to_string()),
            Some("Engineering".to_string()),
        )
        .await?;

    assert_eq!(team.name, "Eng");
    assert_eq!(team.icon.as_deref(), Some("gear"));
    assert_eq!(team.description.as_deref(), Some("Engineering"));

    Ok(())
}

/// Tests creating a team whose name is taken.
///
/// Verifies that the unique index on name rejects the insert and leaves the existing
/// team as the only row.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    repo.create("Eng".to_string(), None, None).await?;

    let err = repo
        .create("Eng".to_string(), None, None)
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::Team::find().all(db).await?.len(), 1);

    Ok(())
}
