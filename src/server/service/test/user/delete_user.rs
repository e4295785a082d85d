use super::*;

/// Tests deleting a user who is a plain member with tickets.
///
/// Expected: confirmation message; user, membership and authored tickets removed
#[tokio::test]
async fn deletes_user_with_memberships_and_tickets() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, member, team) = factory::helpers::create_team_with_admin_and_member(db).await?;
    factory::create_ticket(db, team.id, member.id).await?;
    factory::create_ticket(db, team.id, admin.id).await?;

    let message = UserService::new(db).delete_user(member.id).await?;

    assert_eq!(message, "User deleted successfully");
    assert!(entity::prelude::User::find_by_id(member.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::TeamMember::find().count(db).await?, 1);
    let tickets = entity::prelude::Ticket::find().all(db).await?;
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].author_id, admin.id);

    Ok(())
}

/// Tests deleting the last admin of a team.
///
/// Verifies that the whole deletion is rolled back, including memberships in other
/// teams that would have been removable.
///
/// Expected: Err(AppError::InvalidOperation), nothing deleted
#[tokio::test]
async fn refuses_last_admin_of_a_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (other_admin, _, shared) = factory::helpers::create_team_with_admin_and_member(db).await?;
    let (admin, _, team) = factory::helpers::create_team_with_admin_and_member(db).await?;
    factory::create_membership(db, shared.id, admin.id, TeamRole::Member).await?;

    let result = UserService::new(db).delete_user(admin.id).await;

    match result {
        Err(AppError::InvalidOperation(message)) => {
            assert!(message.contains(&format!("team {}", team.id)))
        }
        other => panic!("Expected InvalidOperation, got: {:?}", other),
    }
    assert!(entity::prelude::User::find_by_id(admin.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::TeamMember::find_by_id((shared.id, admin.id))
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::TeamMember::find_by_id((shared.id, other_admin.id))
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a missing user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).delete_user(77).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
