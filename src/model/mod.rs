//! Data transfer objects shared by the API surface.
//!
//! These types define the JSON wire format for every endpoint. They are
//! deliberately free of business logic; conversions from domain models happen
//! in the server's model layer.

pub mod api;
pub mod club;
pub mod comment;
pub mod tag;
pub mod user;
