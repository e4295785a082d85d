use super::*;

/// Tests listing tickets without a team filter.
///
/// Expected: tickets from every team of the user, none from other teams
#[tokio::test]
async fn lists_tickets_of_all_member_teams() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, first) = factory::helpers::create_team_with_admin(db).await?;
    let (other, second) = factory::helpers::create_team_with_admin(db).await?;
    factory::create_membership(db, second.id, user.id, TeamRole::Member).await?;
    let (stranger, foreign) = factory::helpers::create_team_with_admin(db).await?;

    factory::create_ticket(db, first.id, user.id).await?;
    factory::create_ticket(db, second.id, other.id).await?;
    factory::create_ticket(db, foreign.id, stranger.id).await?;

    let tickets = TicketService::new(db).get_tickets(user.id, None).await?;

    assert_eq!(tickets.len(), 2);
    assert!(tickets.iter().all(|t| t.team_id != foreign.id));

    Ok(())
}

/// Tests listing tickets of one specific team.
///
/// Expected: only that team's tickets
#[tokio::test]
async fn filters_by_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, first) = factory::helpers::create_team_with_admin(db).await?;
    let (_, second) = factory::helpers::create_team_with_admin(db).await?;
    factory::create_membership(db, second.id, user.id, TeamRole::Member).await?;
    factory::create_ticket(db, first.id, user.id).await?;
    factory::create_ticket(db, second.id, user.id).await?;

    let tickets = TicketService::new(db)
        .get_tickets(user.id, Some(second.id))
        .await?;

    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].team_id, second.id);

    Ok(())
}

/// Tests listing tickets of a team the user is not part of.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn rejects_foreign_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (admin, foreign) = factory::helpers::create_team_with_admin(db).await?;
    factory::create_ticket(db, foreign.id, admin.id).await?;

    let result = TicketService::new(db)
        .get_tickets(user.id, Some(foreign.id))
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(_, message))) => {
            assert_eq!(message, "Cannot access tickets of this team")
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests listing tickets for a user without teams.
///
/// Expected: empty list
#[tokio::test]
async fn returns_empty_without_teams() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (admin, team) = factory::helpers::create_team_with_admin(db).await?;
    factory::create_ticket(db, team.id, admin.id).await?;

    let tickets = TicketService::new(db).get_tickets(user.id, None).await?;

    assert!(tickets.is_empty());

    Ok(())
}
