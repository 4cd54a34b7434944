use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is present in the session.
    ///
    /// The request hit an endpoint that requires login without a session, or
    /// with a session that has expired. Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    MissingSession,

    /// Session references a user id that no longer exists.
    ///
    /// The session survived the user row it points at. Results in a 401
    /// Unauthorized response so the client discards the stale session.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Username or password did not match a stored credential.
    ///
    /// The response message never reveals which of the two was wrong.
    #[error("Login failed: invalid credentials")]
    InvalidCredentials,
}

/// Every variant maps to 401 Unauthorized. The precise failure is logged
/// server-side while the client receives a short generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::MissingSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                "Authentication required".to_string()
            }
            Self::InvalidCredentials => "Invalid username or password".to_string(),
        };

        super::error_response(StatusCode::UNAUTHORIZED, message)
    }
}
