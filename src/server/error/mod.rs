//! Application error types and their HTTP mappings.
//!
//! `AppError` is the single error type handlers return. Infrastructure
//! failures convert in via `#[from]`; the request-level outcomes
//! (`NotFound`, `BadRequest`, `Conflict`) carry the message the client sees.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Startup configuration problem; the server cannot run without it.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication failure, mapped to a response by `AuthError` itself.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store failure while reading or writing session state.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// I/O failure, such as the listen address being unavailable at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A referenced entity does not exist. Maps to 404 with the message as
    /// the response body.
    #[error("{0}")]
    NotFound(String),

    /// Missing or malformed input. Maps to 400 with the message as the
    /// response body.
    #[error("{0}")]
    BadRequest(String),

    /// A uniqueness rule was violated, such as a duplicate club code.
    /// Classified apart from `BadRequest` but mapped to the same 400.
    #[error("{0}")]
    Conflict(String),

    /// Catch-all for failures with no dedicated variant. The message is
    /// logged; the client sees a generic 500 body.
    #[error("{0}")]
    InternalError(String),
}

/// Builds the `{"error": ...}` body every error response uses.
fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorDto { error: message })).into_response()
}

/// Maps request-level outcomes to their status codes and hands everything
/// else to [`InternalServerError`] so infrastructure detail never reaches
/// the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) | Self::Conflict(msg) => {
                error_response(StatusCode::BAD_REQUEST, msg)
            }
            Self::InternalError(msg) => {
                tracing::error!("internal error: {msg}");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Fallback wrapper turning any displayable error into a 500 response.
///
/// The wrapped error is logged in full server-side; the response body is a
/// fixed generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
