//! Domain models and per-operation parameter structs.
//!
//! Repositories convert entity rows into these types on the way up, and
//! controllers convert them into wire DTOs on the way out. Services only ever
//! see the types in this module.

pub mod club;
pub mod comment;
pub mod favorite;
pub mod tag;
pub mod user;
