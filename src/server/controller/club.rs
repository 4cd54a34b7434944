use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        club::{ClubDto, CreateClubDto, UpdateClubDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::club::{CreateClubParams, UpdateClubParams},
        service::club::ClubService,
        state::AppState,
    },
};

/// Tag for grouping club endpoints in OpenAPI documentation
pub static CLUB_TAG: &str = "club";

/// Get all clubs.
///
/// Returns every club with its tag names and favorite count. An empty
/// database yields an empty list.
///
/// # Returns
/// - `200 OK` - List of all clubs
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clubs",
    tag = CLUB_TAG,
    responses(
        (status = 200, description = "Successfully retrieved clubs", body = Vec<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_clubs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let clubs = ClubService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(clubs.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Search clubs by name.
///
/// Returns every club whose name contains the given string, matched
/// case-insensitively. No matches yields an empty list.
///
/// # Returns
/// - `200 OK` - List of matching clubs
/// - `400 Bad Request` - Empty search string
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clubs/{code}",
    tag = CLUB_TAG,
    params(
        ("code" = String, Path, description = "Substring to match against club names")
    ),
    responses(
        (status = 200, description = "Successfully retrieved matching clubs", body = Vec<ClubDto>),
        (status = 400, description = "Empty search string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_clubs(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let clubs = ClubService::new(&state.db).search(&name).await?;

    Ok((
        StatusCode::OK,
        Json(clubs.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a new club.
///
/// Creates a club from a code, name, description, and list of tag names.
/// Tags that do not exist yet are created; repeated names in the list are
/// applied once.
///
/// # Access Control
/// - Requires a logged-in session
///
/// # Returns
/// - `200 OK` - Club created
/// - `400 Bad Request` - Missing field or club code already taken
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clubs",
    tag = CLUB_TAG,
    request_body = CreateClubDto,
    responses(
        (status = 200, description = "Club created", body = MessageDto),
        (status = 400, description = "Missing field or duplicate club code", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_club(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    // Convert DTO to server model
    let params = CreateClubParams::from_dto(payload)?;

    ClubService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Club added".to_string(),
        }),
    ))
}

/// Modify a club.
///
/// Updates the club's name, description, and tags. Name and description are
/// applied only when present and non-empty; a present tag list replaces the
/// club's tags wholesale. The code identifies the club and cannot change.
///
/// # Access Control
/// - Requires a logged-in session
///
/// # Returns
/// - `200 OK` - Club updated
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No club with the given code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/clubs/{code}",
    tag = CLUB_TAG,
    params(
        ("code" = String, Path, description = "Club code")
    ),
    request_body = UpdateClubDto,
    responses(
        (status = 200, description = "Club updated", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_club(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
    Json(payload): Json<UpdateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let params = UpdateClubParams::from_dto(payload);

    ClubService::new(&state.db).update(&code, params).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Club updated".to_string(),
        }),
    ))
}
