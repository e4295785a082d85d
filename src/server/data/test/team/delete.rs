use super::*;

/// Tests deleting a team with members and tickets.
///
/// Verifies that memberships and tickets of the team are removed with it while other
/// teams are untouched.
///
/// Expected: Ok(true), no rows left for the deleted team
#[tokio::test]
async fn deletes_team_with_children() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, member, team) = factory::helpers::create_team_with_admin_and_member(db).await?;
    factory::create_ticket(db, team.id, member.id).await?;
    let (_, other_team) = factory::helpers::create_team_with_admin(db).await?;
    factory::create_ticket(db, other_team.id, admin.id).await?;

    let deleted = TeamRepository::new(db).delete(team.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Team::find_by_id(team.id).one(db).await?.is_none());
    let memberships = entity::prelude::TeamMember::find().all(db).await?;
    assert!(memberships.iter().all(|m| m.team_id == other_team.id));
    let tickets = entity::prelude::Ticket::find().all(db).await?;
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].team_id, other_team.id);

    Ok(())
}

/// Tests deleting a team that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = TeamRepository::new(db).delete(99).await?;

    assert!(!deleted);

    Ok(())
}
