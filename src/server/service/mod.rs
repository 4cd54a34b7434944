//! Business logic between the controllers and the repositories.
//!
//! Services validate input, enforce the uniqueness and ownership rules,
//! coordinate repository calls, and turn absent rows or bad input into the
//! API error taxonomy. They speak domain models exclusively.

pub mod auth;
pub mod club;
pub mod comment;
pub mod favorite;
pub mod tag;
pub mod user;
