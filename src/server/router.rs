use axum::{
    routing::{get, post, put},
    Json, Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::MessageDto,
    server::{
        controller::{auth, club, comment, favorite, tag, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(paths(
    home,
    api_welcome,
    club::get_all_clubs,
    club::search_clubs,
    club::create_club,
    club::update_club,
    comment::get_club_comments,
    comment::add_comment,
    comment::get_user_comments,
    tag::get_tag_club_counts,
    user::get_user,
    favorite::favorite_club,
    favorite::unfavorite_club,
    auth::register,
    auth::login,
    auth::logout,
    auth::current_user,
))]
struct ApiDoc;

/// Welcome page.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome message"))
)]
async fn home() -> &'static str {
    "Welcome to Penn Club Review!"
}

/// API welcome message.
#[utoipa::path(
    get,
    path = "/api",
    responses((status = 200, description = "Welcome message", body = MessageDto))
)]
async fn api_welcome() -> Json<MessageDto> {
    Json(MessageDto {
        message: "Welcome to the Penn Club Review API!".to_string(),
    })
}

/// Builds the application router.
///
/// The club item route doubles as the search route: GET interprets the path
/// segment as a name substring, PUT as the club code. Swagger UI for the
/// annotated routes is served at `/docs`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/api", get(api_welcome))
        .route(
            "/api/clubs",
            get(club::get_all_clubs).post(club::create_club),
        )
        .route(
            "/api/clubs/{code}",
            get(club::search_clubs).put(club::update_club),
        )
        .route(
            "/api/clubs/{code}/comments",
            get(comment::get_club_comments).post(comment::add_comment),
        )
        .route("/api/tags/clubcount", get(tag::get_tag_club_counts))
        .route("/api/users/{user_id}", get(user::get_user))
        .route(
            "/api/users/{user_id}/comments",
            get(comment::get_user_comments),
        )
        .route(
            "/api/users/{user_id}/clubs/{code}",
            put(favorite::favorite_club).delete(favorite::unfavorite_club),
        )
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::current_user))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
