use super::*;
use crate::server::data::user::UserRepository;

/// Tests registering a new user.
///
/// Verifies the stored row carries a salted hash that verifies against the
/// raw password, and that the raw password itself is never stored.
///
/// Expected: Ok(User) with a verifiable hash in the database
#[tokio::test]
async fn registers_user_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let service = AuthService::new(&test.db);
    let user = service.register(josh_params()).await?;

    assert_eq!(user.username, "josh");
    assert_eq!(user.email, "josh@upenn.edu");

    let stored = UserRepository::new(&test.db)
        .find_by_username("josh")
        .await?
        .unwrap();
    assert_ne!(stored.password_hash, "hunter2");
    assert!(password::verify_password("hunter2", &stored.password_hash));

    Ok(())
}

/// Tests registering with a username that is already taken.
///
/// Expected: Err(Conflict) with "Username is taken"
#[tokio::test]
async fn rejects_taken_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    factory::create_user_with_username(&test.db, "josh").await?;

    let service = AuthService::new(&test.db);
    let result = service.register(josh_params()).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::Conflict(msg) => assert_eq!(msg, "Username is taken"),
        e => panic!("Expected Conflict error, got: {:?}", e),
    }

    Ok(())
}

/// Tests registering with an email that is already taken.
///
/// Expected: Err(Conflict) with "Email is taken"
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    factory::user::UserFactory::new(&test.db)
        .email("josh@upenn.edu")
        .build()
        .await?;

    let service = AuthService::new(&test.db);
    let result = service.register(josh_params()).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::Conflict(msg) => assert_eq!(msg, "Email is taken"),
        e => panic!("Expected Conflict error, got: {:?}", e),
    }

    Ok(())
}
