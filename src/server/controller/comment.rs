use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Get all comments on a club.
///
/// Returns the club's comments oldest first as a flat list; replies carry
/// the id of their parent comment so threads can be rebuilt client-side.
///
/// # Returns
/// - `200 OK` - List of comments
/// - `404 Not Found` - No club with the given code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clubs/{code}/comments",
    tag = COMMENT_TAG,
    params(
        ("code" = String, Path, description = "Club code")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = Vec<CommentDto>),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_club_comments(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db).get_club_comments(&code).await?;

    Ok((
        StatusCode::OK,
        Json(
            comments
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Comment on a club.
///
/// Posts a comment authored by the logged-in user. Passing the id of an
/// existing comment on the same club creates a reply to it.
///
/// # Access Control
/// - Requires a logged-in session
///
/// # Returns
/// - `200 OK` - The created comment
/// - `400 Bad Request` - Empty text, or parent comment on a different club
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Club or parent comment not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clubs/{code}/comments",
    tag = COMMENT_TAG,
    params(
        ("code" = String, Path, description = "Club code")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 200, description = "Comment created", body = CommentDto),
        (status = 400, description = "Empty text or mismatched parent", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Club or parent comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let comment = CommentService::new(&state.db)
        .add_comment(&user, &code, payload.text, payload.parent_comment_id)
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Get all comments written by a user.
///
/// Returns every comment the user has posted across all clubs, oldest
/// first, each carrying the name of the club it was posted on.
///
/// # Returns
/// - `200 OK` - List of comments
/// - `404 Not Found` - No user with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = Vec<CommentDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_comments(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db).get_user_comments(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            comments
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
