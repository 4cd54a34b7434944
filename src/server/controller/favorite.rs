use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::favorite::{FavoriteOutcome, UnfavoriteOutcome},
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// Favorite a club for a user.
///
/// Adds the club to the user's favorites and increments the club's favorite
/// count. Favoriting a club that is already favorited changes nothing and
/// still reports success.
///
/// # Access Control
/// - Requires a logged-in session
///
/// # Returns
/// - `200 OK` - Club favorited, or was already favorited
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - User or club not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/clubs/{code}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User id"),
        ("code" = String, Path, description = "Club code")
    ),
    responses(
        (status = 200, description = "Club favorited", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User or club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn favorite_club(
    State(state): State<AppState>,
    session: Session,
    Path((user_id, code)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let outcome = FavoriteService::new(&state.db)
        .favorite(user_id, &code)
        .await?;

    let message = match outcome {
        FavoriteOutcome::Added => "Club added to favorites",
        FavoriteOutcome::AlreadyFavorited => "Club already in favorites",
    };

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: message.to_string(),
        }),
    ))
}

/// Unfavorite a club for a user.
///
/// Removes the club from the user's favorites and decrements the club's
/// favorite count, which never drops below zero. Unfavoriting a club that is
/// not favorited changes nothing and still reports success.
///
/// # Access Control
/// - Requires a logged-in session
///
/// # Returns
/// - `200 OK` - Club unfavorited, or was not favorited
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - User or club not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/clubs/{code}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User id"),
        ("code" = String, Path, description = "Club code")
    ),
    responses(
        (status = 200, description = "Club unfavorited", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User or club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unfavorite_club(
    State(state): State<AppState>,
    session: Session,
    Path((user_id, code)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let outcome = FavoriteService::new(&state.db)
        .unfavorite(user_id, &code)
        .await?;

    let message = match outcome {
        UnfavoriteOutcome::Removed => "Club removed from favorites",
        UnfavoriteOutcome::NotFavorited => "Club not in favorites",
    };

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: message.to_string(),
        }),
    ))
}
