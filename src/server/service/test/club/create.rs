use super::*;

/// Tests creating a club through the service.
///
/// Verifies that the domain model comes back with flattened tag names and a
/// zeroed favorites counter.
///
/// Expected: Ok(Club) with tags as names
#[tokio::test]
async fn creates_club_with_tag_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let service = ClubService::new(&test.db);
    let club = service
        .create(CreateClubParams {
            code: "pppjo".to_string(),
            name: "Penn Pre-Professional Juggling Organization".to_string(),
            description: "Juggling, but professionally.".to_string(),
            tags: vec!["Undergraduate".to_string()],
        })
        .await?;

    assert_eq!(club.code, "pppjo");
    assert_eq!(club.favorites, 0);
    assert_eq!(club.tags, vec!["Undergraduate".to_string()]);

    Ok(())
}

/// Tests creating a club with a code that is already taken.
///
/// Verifies that the second create is rejected and the first club is left
/// untouched.
///
/// Expected: Err(Conflict) with the original club unchanged
#[tokio::test]
async fn rejects_taken_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    factory::create_club_with_code(&test.db, "pppjo").await?;

    let service = ClubService::new(&test.db);
    let result = service
        .create(CreateClubParams {
            code: "pppjo".to_string(),
            name: "Impostor Club".to_string(),
            description: "Same code, different club.".to_string(),
            tags: vec![],
        })
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::Conflict(msg) => assert_eq!(msg, "Club code is taken"),
        e => panic!("Expected Conflict error, got: {:?}", e),
    }

    let clubs = service.get_all().await?;
    assert_eq!(clubs.len(), 1);
    assert_ne!(clubs[0].name, "Impostor Club");

    Ok(())
}
