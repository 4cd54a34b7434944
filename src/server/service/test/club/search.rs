use super::*;
use test_utils::factory::club::ClubFactory;

/// Tests searching with an empty query string.
///
/// The blank search is rejected up front, whatever the database holds.
///
/// Expected: Err(BadRequest) with "No name entered"
#[tokio::test]
async fn rejects_empty_query() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    factory::create_club(&test.db).await?;

    let service = ClubService::new(&test.db);
    let result = service.search("").await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::BadRequest(msg) => assert_eq!(msg, "No name entered"),
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    Ok(())
}

/// Tests searching by a name substring.
///
/// Expected: Ok with only the matching club
#[tokio::test]
async fn finds_clubs_by_substring() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    ClubFactory::new(&test.db)
        .name("Penn Juggling Club")
        .build()
        .await?;
    ClubFactory::new(&test.db)
        .name("Chess Society")
        .build()
        .await?;

    let service = ClubService::new(&test.db);
    let results = service.search("juggling").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Penn Juggling Club");

    Ok(())
}

/// Tests searching with a query that matches nothing.
///
/// Expected: Ok with an empty list, not an error
#[tokio::test]
async fn no_matches_is_empty_not_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    factory::create_club(&test.db).await?;

    let service = ClubService::new(&test.db);
    let results = service.search("zzzz").await?;

    assert!(results.is_empty());

    Ok(())
}
