use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, tag::TagClubCountDto},
    server::{error::AppError, service::tag::TagService, state::AppState},
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// Get the club count for every tag.
///
/// Returns each tag name with the number of clubs linked to it, including
/// tags no club currently references (count 0).
///
/// # Returns
/// - `200 OK` - List of tag names with club counts
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tags/clubcount",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tag club counts", body = Vec<TagClubCountDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag_club_counts(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let counts = TagService::new(&state.db).get_club_counts().await?;

    Ok((
        StatusCode::OK,
        Json(counts.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}
