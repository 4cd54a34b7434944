use super::*;
use test_utils::factory::user::UserFactory;

/// Tests finding an existing user by email.
///
/// Expected: Ok(Some(user)) with matching data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let user = UserFactory::new(&test.db)
        .email("josh@upenn.edu")
        .build()
        .await?;

    let repo = UserRepository::new(&test.db);
    let found = repo.find_by_email("josh@upenn.edu").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, user.id);

    Ok(())
}

/// Tests querying for an email no user has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    factory::create_user(&test.db).await?;

    let repo = UserRepository::new(&test.db);
    let found = repo.find_by_email("nobody@upenn.edu").await?;

    assert!(found.is_none());

    Ok(())
}
