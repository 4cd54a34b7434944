use super::*;

/// Tests finding an existing club by code.
///
/// Expected: Ok(Some(club)) with matching data
#[tokio::test]
async fn finds_existing_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let club = factory::create_club_with_code(&test.db, "pppjo").await?;

    let repo = ClubRepository::new(&test.db);
    let found = repo.find_by_code("pppjo").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, club.id);

    Ok(())
}

/// Tests querying for a code no club has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    factory::create_club_with_code(&test.db, "pppjo").await?;

    let repo = ClubRepository::new(&test.db);
    let found = repo.find_by_code("missing").await?;

    assert!(found.is_none());

    Ok(())
}
