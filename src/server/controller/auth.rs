use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginUserDto, RegisterUserDto, UserDto, UserProfileDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::RegisterUserParams,
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a user from a username, email, and password plus profile fields.
/// The password is stored salted and hashed, never in clear. Registering
/// does not log the user in.
///
/// # Returns
/// - `200 OK` - The new user's public profile
/// - `400 Bad Request` - Missing field, taken username or email, or invalid graduation year
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "User registered", body = UserDto),
        (status = 400, description = "Missing or conflicting field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::from_dto(payload)?;

    let user = AuthService::new(&state.db).register(params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log in.
///
/// Verifies the username and password and stores the user id in the
/// session. The response never says which of the two was wrong.
///
/// # Returns
/// - `200 OK` - The logged-in user's own profile, including favorited clubs
/// - `401 Unauthorized` - Unknown username or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginUserDto,
    responses(
        (status = 200, description = "Logged in", body = UserProfileDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.username, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    let profile = UserService::new(&state.db).get_profile(user.id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Log out.
///
/// Clears the session.
///
/// # Access Control
/// - Requires a logged-in session
///
/// # Returns
/// - `200 OK` - Session cleared
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the logged-in user.
///
/// Returns the private view of the current user, including the list of
/// favorited club names that the public profile endpoint omits.
///
/// # Access Control
/// - Requires a logged-in session
///
/// # Returns
/// - `200 OK` - The logged-in user's own profile
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user profile", body = UserProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let profile = UserService::new(&state.db).get_profile(user.id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
