use super::*;

/// Tests unfavoriting a club by code through the service.
///
/// Expected: Ok(Removed) then Ok(NotFavorited) on repeat
#[tokio::test]
async fn unfavorite_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let user = factory::create_user(&test.db).await?;
    factory::create_club_with_code(&test.db, "pppjo").await?;

    let service = FavoriteService::new(&test.db);
    service.favorite(user.id, "pppjo").await?;

    let first = service.unfavorite(user.id, "pppjo").await?;
    assert_eq!(first, UnfavoriteOutcome::Removed);

    let second = service.unfavorite(user.id, "pppjo").await?;
    assert_eq!(second, UnfavoriteOutcome::NotFavorited);

    Ok(())
}

/// Tests unfavoriting with an unknown user or club.
///
/// Expected: Err(NotFound) with "User or Club not found"
#[tokio::test]
async fn errors_when_either_side_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let user = factory::create_user(&test.db).await?;
    factory::create_club_with_code(&test.db, "pppjo").await?;

    let service = FavoriteService::new(&test.db);

    let result = service.unfavorite(9999, "pppjo").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service.unfavorite(user.id, "missing").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
