use super::*;

/// Tests the guard with a session holding a valid user id.
///
/// Expected: Ok(User) matching the logged-in user
#[tokio::test]
async fn grants_access_with_valid_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests the guard with no user in the session.
///
/// Expected: Err(AuthError::MissingSession)
#[tokio::test]
async fn rejects_missing_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require().await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::MissingSession) => {}
        e => panic!("Expected MissingSession error, got: {:?}", e),
    }

    Ok(())
}

/// Tests the guard when the session's user row no longer exists.
///
/// A session that outlives its user must be rejected rather than treated
/// as anonymous.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the stale id
#[tokio::test]
async fn rejects_session_for_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(9999).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require().await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInDatabase(user_id)) => {
            assert_eq!(user_id, 9999);
        }
        e => panic!("Expected UserNotInDatabase error, got: {:?}", e),
    }

    Ok(())
}
