use super::*;
use test_utils::factory::club::ClubFactory;

/// Tests listing a user's comments across clubs.
///
/// Verifies each comment carries the name of the club it was posted on.
///
/// Expected: Ok with comments labeled by club name
#[tokio::test]
async fn lists_user_comments_with_club_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let user = factory::create_user(&test.db).await?;
    let chess = ClubFactory::new(&test.db)
        .code("chess")
        .name("Chess Club")
        .build()
        .await?;
    let memes = ClubFactory::new(&test.db)
        .code("memes")
        .name("Memes Club")
        .build()
        .await?;

    factory::create_comment(&test.db, user.id, chess.id).await?;
    factory::create_comment(&test.db, user.id, memes.id).await?;

    let service = CommentService::new(&test.db);
    let comments = service.get_user_comments(user.id).await?;

    assert_eq!(comments.len(), 2);

    let club_names: Vec<&str> = comments
        .iter()
        .map(|comment| comment.club_name.as_str())
        .collect();
    assert!(club_names.contains(&"Chess Club"));
    assert!(club_names.contains(&"Memes Club"));

    Ok(())
}

/// Tests listing comments for an unknown user.
///
/// Expected: Err(NotFound) with "User not found"
#[tokio::test]
async fn errors_on_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let service = CommentService::new(&test.db);
    let result = service.get_user_comments(9999).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::NotFound(msg) => assert_eq!(msg, "User not found"),
        e => panic!("Expected NotFound error, got: {:?}", e),
    }

    Ok(())
}
