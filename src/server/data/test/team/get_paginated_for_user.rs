use super::*;

/// Tests that listing only returns teams the user belongs to.
///
/// Expected: the user's team only, never the foreign team
#[tokio::test]
async fn only_returns_member_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, own_team) = factory::helpers::create_team_with_admin(db).await?;
    let (_, foreign_team) = factory::helpers::create_team_with_admin(db).await?;

    let (teams, total) = TeamRepository::new(db)
        .get_paginated_for_user(user.id, &TeamFilter::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(teams[0].team.id, own_team.id);
    assert!(teams.iter().all(|t| t.team.id != foreign_team.id));

    Ok(())
}

/// Tests search on name or description within the user's teams.
///
/// Expected: teams matching by name or by description
#[tokio::test]
async fn searches_name_and_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let platform = factory::team::TeamFactory::new(db)
        .name("Platform")
        .build()
        .await?;
    let infra = factory::team::TeamFactory::new(db)
        .name("Infra")
        .description("Runs the platform")
        .build()
        .await?;
    let design = factory::team::TeamFactory::new(db)
        .name("Design")
        .build()
        .await?;
    for team in [&platform, &infra, &design] {
        factory::create_admin_membership(db, team.id, user.id).await?;
    }

    let (teams, total) = TeamRepository::new(db)
        .get_paginated_for_user(
            user.id,
            &TeamFilter {
                search: Some("latform".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(total, 2);
    let mut ids: Vec<i32> = teams.iter().map(|t| t.team.id).collect();
    ids.sort();
    assert_eq!(ids, vec![platform.id, infra.id]);

    Ok(())
}

/// Tests ordering and pagination.
///
/// Verifies newest-first ordering and that the total counts every match rather than
/// the page size.
///
/// Expected: page 0 holds the two newest teams, total 3
#[tokio::test]
async fn paginates_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let mut created = Vec::new();
    for _ in 0..3 {
        let team = factory::create_team(db).await?;
        factory::create_admin_membership(db, team.id, user.id).await?;
        created.push(team.id);
    }

    let (teams, total) = TeamRepository::new(db)
        .get_paginated_for_user(
            user.id,
            &TeamFilter {
                search: None,
                page: PageRequest { page: 0, limit: 2 },
            },
        )
        .await?;

    assert_eq!(total, 3);
    let ids: Vec<i32> = teams.iter().map(|t| t.team.id).collect();
    assert_eq!(ids, vec![created[2], created[1]]);

    Ok(())
}

/// Tests that `_` and `%` in the search term match literally.
///
/// Expected: "a_b" finds only "a_b"; "%" finds only "50% off"
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let mut teams = Vec::new();
    for name in ["axb", "a_b", "50% off"] {
        let team = factory::team::TeamFactory::new(db).name(name).build().await?;
        factory::create_admin_membership(db, team.id, user.id).await?;
        teams.push(team);
    }

    let repo = TeamRepository::new(db);
    let search = |term: &str| TeamFilter {
        search: Some(term.to_string()),
        ..Default::default()
    };

    let (underscore, total) = repo.get_paginated_for_user(user.id, &search("a_b")).await?;
    assert_eq!(total, 1);
    assert_eq!(underscore[0].team.id, teams[1].id);

    let (percent, total) = repo.get_paginated_for_user(user.id, &search("%")).await?;
    assert_eq!(total, 1);
    assert_eq!(percent[0].team.id, teams[2].id);

    Ok(())
}
