use super::*;

/// Tests renaming a team to its own name.
///
/// Expected: Ok(TeamWithMembers) with the new description
#[tokio::test]
async fn allows_same_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = factory::helpers::create_team_with_admin(db).await?;

    let updated = TeamService::new(db)
        .update(
            team.id,
            UpdateTeamParams {
                name: Some(team.name.clone()),
                description: Some("Platform group".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.team.name, team.name);
    assert_eq!(updated.team.description.as_deref(), Some("Platform group"));
    assert_eq!(updated.members.len(), 1);

    Ok(())
}

/// Tests renaming a team to another team's name.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_taken_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, taken) = factory::helpers::create_team_with_admin(db).await?;
    let (_, team) = factory::helpers::create_team_with_admin(db).await?;

    let result = TeamService::new(db)
        .update(
            team.id,
            UpdateTeamParams {
                name: Some(taken.name.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting a team and then fetching it.
///
/// Expected: confirmation message, then Err(AppError::NotFound)
#[tokio::test]
async fn deletes_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, team) = factory::helpers::create_team_with_admin(db).await?;
    factory::create_ticket(db, team.id, admin.id).await?;

    let service = TeamService::new(db);
    let message = service.delete(team.id).await?;

    assert_eq!(message, "Team deleted successfully");
    assert!(matches!(
        service.find_one(team.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(entity::prelude::Ticket::find().count(db).await?, 0);

    Ok(())
}
