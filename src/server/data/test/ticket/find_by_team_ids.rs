use super::*;

/// Tests listing tickets for a set of teams.
///
/// Expected: tickets of the requested teams only, newest first
#[tokio::test]
async fn returns_tickets_of_given_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, team) = factory::helpers::create_team_with_admin(db).await?;
    let (other_author, other_team) = factory::helpers::create_team_with_admin(db).await?;
    let older = factory::create_ticket(db, team.id, author.id).await?;
    let newer = factory::create_ticket(db, team.id, author.id).await?;
    factory::create_ticket(db, other_team.id, other_author.id).await?;

    let tickets = TicketRepository::new(db).find_by_team_ids(&[team.id]).await?;

    let ids: Vec<i32> = tickets.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests listing tickets for no teams.
///
/// Expected: empty list
#[tokio::test]
async fn returns_empty_for_no_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, team) = factory::helpers::create_team_with_admin(db).await?;
    factory::create_ticket(db, team.id, author.id).await?;

    let tickets = TicketRepository::new(db).find_by_team_ids(&[]).await?;

    assert!(tickets.is_empty());

    Ok(())
}
