use super::*;

/// Tests renaming a team to its current name.
///
/// Expected: Ok(Some(Team)) with the name unchanged
#[tokio::test]
async fn allows_keeping_current_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::TeamFactory::new(db).name("Eng").build().await?;

    let updated = TeamRepository::new(db)
        .update(
            team.id,
            UpdateTeamParams {
                name: Some("Eng".to_string()),
                description: Some("Engineering".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Eng");
    assert_eq!(updated.description.as_deref(), Some("Engineering"));

    Ok(())
}

/// Tests renaming a team to another team's name.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation, original name kept
#[tokio::test]
async fn rejects_taken_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::team::TeamFactory::new(db).name("Eng").build().await?;
    let ops = factory::team::TeamFactory::new(db).name("Ops").build().await?;

    let repo = TeamRepository::new(db);
    let err = repo
        .update(
            ops.id,
            UpdateTeamParams {
                name: Some("Eng".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.find_by_id(ops.id).await?.unwrap().name, "Ops");

    Ok(())
}

/// Tests updating a team that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamRepository::new(db)
        .update(
            7,
            UpdateTeamParams {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
