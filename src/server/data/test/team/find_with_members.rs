use super::*;

/// Tests hydrating a team with its members.
///
/// Verifies that each membership carries its role and the member's public profile.
///
/// Expected: Ok(Some) with two members in join order
#[tokio::test]
async fn hydrates_members_with_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, member, team) = factory::helpers::create_team_with_admin_and_member(db).await?;

    let hydrated = TeamRepository::new(db)
        .find_with_members(team.id)
        .await?
        .unwrap();

    assert_eq!(hydrated.team.id, team.id);
    assert_eq!(hydrated.members.len(), 2);

    let admin_row = hydrated
        .members
        .iter()
        .find(|m| m.user.id == admin.id)
        .unwrap();
    let member_row = hydrated
        .members
        .iter()
        .find(|m| m.user.id == member.id)
        .unwrap();

    assert_eq!(admin_row.membership.role, TeamRole::Admin);
    assert_eq!(admin_row.user.email, admin.email);
    assert_eq!(member_row.membership.role, TeamRole::Member);

    Ok(())
}

/// Tests looking up a team that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamRepository::new(db).find_with_members(1).await?;

    assert!(result.is_none());

    Ok(())
}
