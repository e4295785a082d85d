use super::*;

/// Tests removing the only ADMIN of a team.
///
/// Expected: Ok(false), membership still present
#[tokio::test]
async fn refuses_sole_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, _, team) = factory::helpers::create_team_with_admin_and_member(db).await?;

    let repo = TeamMemberRepository::new(db);
    let deleted = repo.delete_unless_last_admin(team.id, admin.id).await?;

    assert!(!deleted);
    assert!(repo.find(team.id, admin.id).await?.is_some());

    Ok(())
}

/// Tests removing the only member of a team, who is necessarily its ADMIN.
///
/// Expected: Ok(false)
#[tokio::test]
async fn refuses_sole_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, team) = factory::helpers::create_team_with_admin(db).await?;

    let deleted = TeamMemberRepository::new(db)
        .delete_unless_last_admin(team.id, admin.id)
        .await?;

    assert!(!deleted);

    Ok(())
}

/// Tests removing one of two ADMINs.
///
/// Expected: Ok(true), the other ADMIN remains
#[tokio::test]
async fn allows_admin_when_another_remains() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, team) = factory::helpers::create_team_with_admin(db).await?;
    let second = factory::create_user(db).await?;
    factory::create_admin_membership(db, team.id, second.id).await?;

    let repo = TeamMemberRepository::new(db);
    let deleted = repo.delete_unless_last_admin(team.id, admin.id).await?;

    assert!(deleted);
    assert!(repo.find(team.id, admin.id).await?.is_none());
    assert_eq!(
        repo.find(team.id, second.id).await?.unwrap().role,
        TeamRole::Admin
    );

    Ok(())
}

/// Tests removing a plain MEMBER.
///
/// Expected: Ok(true)
#[tokio::test]
async fn allows_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, member, team) = factory::helpers::create_team_with_admin_and_member(db).await?;

    let repo = TeamMemberRepository::new(db);
    let deleted = repo.delete_unless_last_admin(team.id, member.id).await?;

    assert!(deleted);
    assert!(repo.find(team.id, member.id).await?.is_none());

    Ok(())
}

/// Tests that an ADMIN of another team does not count towards this team's admins.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_admins_of_other_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, team) = factory::helpers::create_team_with_admin(db).await?;
    let other_team = factory::create_team(db).await?;
    factory::create_admin_membership(db, other_team.id, admin.id).await?;
    let other_admin = factory::create_user(db).await?;
    factory::create_admin_membership(db, other_team.id, other_admin.id).await?;

    let deleted = TeamMemberRepository::new(db)
        .delete_unless_last_admin(team.id, admin.id)
        .await?;

    assert!(!deleted);

    Ok(())
}
