use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Resolves the session to an authenticated user before a handler runs.
///
/// Mutating endpoints construct a guard and call [`AuthGuard::require`] as
/// their first step; everything after it operates on a known principal.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in user or rejects the request with 401.
    ///
    /// The session must carry a user id and that id must still resolve to a
    /// user row. A session pointing at a deleted user is rejected, not
    /// treated as anonymous.
    pub async fn require(&self) -> Result<entity::user::Model, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::MissingSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}
