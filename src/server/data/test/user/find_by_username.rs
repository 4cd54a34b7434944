use super::*;

/// Tests finding an existing user by username.
///
/// Expected: Ok(Some(user)) with matching data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let user = factory::create_user_with_username(&test.db, "josh").await?;

    let repo = UserRepository::new(&test.db);
    let found = repo.find_by_username("josh").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, user.id);

    Ok(())
}

/// Tests querying for a username no user has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    factory::create_user_with_username(&test.db, "josh").await?;

    let repo = UserRepository::new(&test.db);
    let found = repo.find_by_username("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
