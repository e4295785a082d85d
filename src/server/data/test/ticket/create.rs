use super::*;

/// Tests creating a ticket without a status.
///
/// Expected: Ok(Ticket) with status OPEN and the author set
#[tokio::test]
async fn defaults_status_to_open() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, team) = factory::helpers::create_team_with_admin(db).await?;

    let ticket = TicketRepository::new(db)
        .create(
            author.id,
            CreateTicketParams {
                title: "Printer on fire".to_string(),
                description: "Third floor".to_string(),
                status: None,
                team_id: team.id,
            },
        )
        .await?;

    assert_eq!(ticket.title, "Printer on fire");
    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.author_id, author.id);
    assert_eq!(ticket.team_id, team.id);

    Ok(())
}

/// Tests creating a ticket with an explicit status.
///
/// Expected: Ok(Ticket) with the requested status
#[tokio::test]
async fn keeps_explicit_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, team) = factory::helpers::create_team_with_admin(db).await?;

    let ticket = TicketRepository::new(db)
        .create(
            author.id,
            CreateTicketParams {
                title: "Reset VPN".to_string(),
                description: "Token expired".to_string(),
                status: Some(TicketStatus::InProgress),
                team_id: team.id,
            },
        )
        .await?;

    assert_eq!(ticket.status, TicketStatus::InProgress);

    Ok(())
}
