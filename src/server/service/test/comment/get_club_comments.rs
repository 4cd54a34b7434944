use super::*;

/// Tests listing a club's comments with author usernames.
///
/// Verifies replies appear in the same flat list as their parents, carrying
/// the parent id.
///
/// Expected: Ok with both comments, reply pointing at its parent
#[tokio::test]
async fn lists_comments_and_replies_with_usernames() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let josh = factory::create_user_with_username(&test.db, "josh").await?;
    let emma = factory::create_user_with_username(&test.db, "emma").await?;
    factory::create_club_with_code(&test.db, "pppjo").await?;

    let service = CommentService::new(&test.db);
    let parent = service
        .add_comment(&josh, "pppjo", Some("Great club!".to_string()), None)
        .await?;
    service
        .add_comment(
            &emma,
            "pppjo",
            Some("I agree".to_string()),
            Some(parent.id),
        )
        .await?;

    let comments = service.get_club_comments("pppjo").await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].username, "josh");
    assert!(comments[0].parent_comment_id.is_none());
    assert_eq!(comments[1].username, "emma");
    assert_eq!(comments[1].parent_comment_id, Some(parent.id));

    Ok(())
}

/// Tests listing comments for an unknown club code.
///
/// Expected: Err(NotFound) with "Club not found"
#[tokio::test]
async fn errors_on_unknown_club() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let service = CommentService::new(&test.db);
    let result = service.get_club_comments("missing").await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::NotFound(msg) => assert_eq!(msg, "Club not found"),
        e => panic!("Expected NotFound error, got: {:?}", e),
    }

    Ok(())
}

/// Tests listing comments for a club that has none.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_quiet_club() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    factory::create_club_with_code(&test.db, "pppjo").await?;

    let service = CommentService::new(&test.db);
    let comments = service.get_club_comments("pppjo").await?;

    assert!(comments.is_empty());

    Ok(())
}
