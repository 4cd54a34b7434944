//! HTTP API controllers.
//!
//! Handlers extract request data, run the auth guard where a route mutates
//! state, delegate to the service layer, and convert domain models to DTOs.
//! Every handler carries a `#[utoipa::path]` annotation for the OpenAPI
//! document served at `/docs`.

pub mod auth;
pub mod club;
pub mod comment;
pub mod favorite;
pub mod tag;
pub mod user;
